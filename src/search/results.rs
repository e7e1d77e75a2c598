use std::sync::Arc;
use crate::core::error::Result;
use crate::core::routing::Indexable;
use crate::core::store::DocumentStore;

/// References found by one search.
///
/// Resolving is lazy: documents removed after the search make `collect` fail
/// instead of silently shrinking the result.
pub struct SearchResult<'a, T> {
    store: &'a DocumentStore<T>,
    refs: Vec<String>,
}

impl<'a, T: Indexable> SearchResult<'a, T> {
    pub fn new(store: &'a DocumentStore<T>, refs: Vec<String>) -> Self {
        SearchResult { store, refs }
    }

    /// Document ids as returned by the index, unordered, duplicates kept
    pub fn refs(&self) -> &[String] {
        &self.refs
    }

    pub fn into_refs(self) -> Vec<String> {
        self.refs
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Payload of every reference, in reference order.
    /// Fails with `RefNotFound` if any document is gone.
    pub fn collect(&self) -> Result<Vec<Arc<T>>> {
        self.refs.iter().map(|id| self.store.get(id)).collect()
    }
}
