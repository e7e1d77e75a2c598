pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits on the ASCII space only and keeps `[A-Za-z0-9]` of every word.
/// Words left empty after stripping are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceTokenizer;

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(' ')
            .map(strip_special_chars)
            .filter(|word| !word.is_empty())
            .collect()
    }
}

/// Keeps ASCII letters, digits and spaces, in their original order
pub fn strip_special_chars(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}
