use rust_stemmers::{Algorithm, Stemmer};
use crate::analysis::filters::length::DEFAULT_SHORT_WORD_LEN;
use crate::analysis::filters::stopword::is_english_stop_word;

/// Reduces a word to its root form.
///
/// Returns `None` when the word is not recognized; callers then fall back to
/// plain lowercasing.
pub trait WordStemmer: Send + Sync {
    fn stem(&self, word: &str, language: Algorithm, stem_stop_words: bool) -> Option<String>;
}

/// Snowball stemmer.
///
/// Words up to two bytes, and English stop words unless `stem_stop_words` is
/// set, come back lowercased but otherwise untouched. Every other non-empty
/// word is stemmed, digits included.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnowballStemmer;

impl WordStemmer for SnowballStemmer {
    fn stem(&self, word: &str, language: Algorithm, stem_stop_words: bool) -> Option<String> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return None;
        }

        if word.len() <= DEFAULT_SHORT_WORD_LEN
            || (!stem_stop_words && is_english_stop_word(&word))
        {
            return Some(word);
        }

        let stemmer = Stemmer::create(language);
        Some(stemmer.stem(&word).into_owned())
    }
}
