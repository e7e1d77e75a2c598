/// References stored under one token.
/// Note: insertion order until the first removal, duplicates allowed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    pub refs: Vec<String>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList { refs: Vec::new() }
    }

    pub fn push(&mut self, reference: &str) {
        self.refs.push(reference.to_string());
    }

    /// Removes every occurrence of `reference` by swapping it with the last
    /// entry and truncating. Returns how many entries were removed.
    pub fn remove_all(&mut self, reference: &str) -> usize {
        let mut removed = 0;
        let mut i = 0;

        while i < self.refs.len() {
            if self.refs[i] == reference {
                // the swapped-in entry is checked on the next pass
                self.refs.swap_remove(i);
                removed += 1;
            } else {
                i += 1;
            }
        }

        removed
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.refs
    }
}
