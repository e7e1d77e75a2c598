use std::sync::Arc;
use rust_stemmers::Algorithm;
use crate::analysis::filters::length::ShortWordFilter;
use crate::analysis::filters::stemmer::{SnowballStemmer, WordStemmer};
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::tokenizer::{strip_special_chars, SpaceTokenizer, Tokenizer};
use crate::core::config::IndexConfig;

/// Text analysis pipeline of one index
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub stemmer: Option<Arc<dyn WordStemmer>>,
    pub stop_words: Option<StopWordFilter>,
    pub short_words: Option<ShortWordFilter>,
    pub language: Algorithm,
}

impl Analyzer {
    pub fn new(config: &IndexConfig) -> Self {
        Analyzer::with_stemmer(config, Arc::new(SnowballStemmer))
    }

    pub fn with_stemmer(config: &IndexConfig, stemmer: Arc<dyn WordStemmer>) -> Self {
        Analyzer {
            tokenizer: Box::new(SpaceTokenizer),
            stemmer: config.stemming.then_some(stemmer),
            stop_words: (!config.keep_stop_words).then(StopWordFilter::english),
            short_words: (!config.keep_short_words).then(ShortWordFilter::default),
            language: Algorithm::English,
        }
    }

    /// Tokens of a sentence, in order, duplicates kept
    pub fn analyze(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .iter()
            .filter_map(|word| self.normalize(word))
            .collect()
    }

    /// Turns one stripped word into a token, or drops it
    pub fn normalize(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }

        // a recognized stem skips the stop and short word filters
        if let Some(stemmed) = self.stem(word) {
            return Some(stemmed);
        }

        let lower = word.to_lowercase();
        if let Some(short_words) = &self.short_words {
            if short_words.is_short(&lower) {
                return None;
            }
        }
        if let Some(stop_words) = &self.stop_words {
            if stop_words.is_stop_word(&lower) {
                return None;
            }
        }
        Some(lower)
    }

    /// Lookup form of a query word. Unlike `normalize` nothing is dropped.
    pub fn normalize_query(&self, word: &str) -> Option<String> {
        let word = strip_special_chars(word.trim());
        if word.is_empty() {
            return None;
        }
        self.stem(&word).or_else(|| Some(word.to_lowercase()))
    }

    fn stem(&self, word: &str) -> Option<String> {
        let stemmer = self.stemmer.as_ref()?;
        stemmer
            .stem(word, self.language, self.stop_words.is_none())
            .filter(|stemmed| !stemmed.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NeverStems;

    impl WordStemmer for NeverStems {
        fn stem(&self, _word: &str, _language: Algorithm, _stem_stop_words: bool) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_default_policy_drops_stop_and_short_words() {
        let analyzer = Analyzer::new(&IndexConfig::default());
        assert_eq!(analyzer.analyze("So testing some stop words"), vec!["testing", "stop", "words"]);
    }

    #[test]
    fn test_keep_stop_words() {
        let analyzer = Analyzer::new(&IndexConfig::new().with_stop_words());
        assert_eq!(analyzer.analyze("So testing some stop words"), vec!["testing", "some", "stop", "words"]);
    }

    #[test]
    fn test_keep_stop_and_short_words() {
        let analyzer = Analyzer::new(&IndexConfig::new().with_stop_words().with_short_words());
        assert_eq!(
            analyzer.analyze("So testing some stop words"),
            vec!["so", "testing", "some", "stop", "words"]
        );
    }

    #[test]
    fn test_short_words_without_stop_words() {
        // "so" survives the length check but is still a stop word
        let analyzer = Analyzer::new(&IndexConfig::new().with_short_words());
        assert_eq!(analyzer.analyze("So go ok"), vec!["go", "ok"]);
    }

    #[test]
    fn test_stemming_bypasses_filters() {
        let analyzer = Analyzer::new(&IndexConfig::new().with_stemming());
        assert_eq!(analyzer.analyze("There are too many cats!"), vec!["there", "are", "too", "mani", "cat"]);
    }

    #[test]
    fn test_unrecognized_stem_falls_back() {
        let analyzer = Analyzer::with_stemmer(&IndexConfig::new().with_stemming(), Arc::new(NeverStems));
        assert_eq!(analyzer.analyze("There are many Cats"), vec!["many", "cats"]);
    }

    #[test]
    fn test_stemming_keeps_numbers() {
        let analyzer = Analyzer::new(&IndexConfig::new().with_stemming());
        assert_eq!(analyzer.analyze("Build 42 of x86"), vec!["build", "42", "of", "x86"]);

        // without stemming "42" is a short word
        let analyzer = Analyzer::new(&IndexConfig::default());
        assert_eq!(analyzer.analyze("Build 42 of x86"), vec!["build", "x86"]);
    }

    #[test]
    fn test_normalize_query() {
        let analyzer = Analyzer::new(&IndexConfig::default());
        assert_eq!(analyzer.normalize_query("TESTING!").as_deref(), Some("testing"));
        assert_eq!(analyzer.normalize_query("so").as_deref(), Some("so"));
        assert_eq!(analyzer.normalize_query("?!"), None);

        let analyzer = Analyzer::new(&IndexConfig::new().with_stemming());
        assert_eq!(analyzer.normalize_query("Many").as_deref(), Some("mani"));
        assert_eq!(analyzer.normalize_query("cats").as_deref(), Some("cat"));
    }
}
