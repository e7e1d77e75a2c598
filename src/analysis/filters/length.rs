pub const DEFAULT_SHORT_WORD_LEN: usize = 2;

/// Drops words no longer than `max_len` bytes
#[derive(Debug, Clone, Copy)]
pub struct ShortWordFilter {
    pub max_len: usize,
}

impl Default for ShortWordFilter {
    fn default() -> Self {
        ShortWordFilter {
            max_len: DEFAULT_SHORT_WORD_LEN,
        }
    }
}

impl ShortWordFilter {
    pub fn is_short(&self, word: &str) -> bool {
        word.len() <= self.max_len
    }
}
