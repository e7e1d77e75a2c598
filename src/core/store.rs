use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use parking_lot::RwLock;
use tracing::{debug, trace};
use crate::analysis::filters::stemmer::{SnowballStemmer, WordStemmer};
use crate::core::config::StoreConfig;
use crate::core::error::{Error, Result};
use crate::core::routing::{Destination, Indexable, Router};
use crate::core::types::{IdGenerator, UuidGenerator};
use crate::index::inverted::InvertedIndex;
use crate::index::registry::IndexRegistry;
use crate::search::fuzzy::{FuzzyRanker, SubsequenceRanker};
use crate::search::results::SearchResult;

struct Document<T> {
    payload: Arc<T>,
    record_locator: HashSet<String>, // Indices holding at least one posting of this document
}

/// Stores payloads by id and keeps their postings in the named indices.
///
/// Lock order: the document map first, then one index at a time. The registry
/// lock is only held while looking an index up.
///
/// Routing and analysis run before the document map lock is taken. Unindexing
/// and posting writes still run under it, so writes of concurrent adds are
/// serialized even when they target different indices.
pub struct DocumentStore<T> {
    docs: RwLock<HashMap<String, Document<T>>>,
    registry: IndexRegistry,
    ids: Arc<dyn IdGenerator>,
}

impl<T: Indexable> Default for DocumentStore<T> {
    fn default() -> Self {
        DocumentStore::build(
            &StoreConfig::default(),
            Arc::new(UuidGenerator),
            Arc::new(SnowballStemmer),
            Arc::new(SubsequenceRanker),
        )
    }
}

impl<T: Indexable> DocumentStore<T> {
    pub fn new(config: StoreConfig) -> Result<Self> {
        DocumentStore::with_capabilities(
            config,
            Arc::new(UuidGenerator),
            Arc::new(SnowballStemmer),
            Arc::new(SubsequenceRanker),
        )
    }

    pub fn with_capabilities(
        config: StoreConfig,
        ids: Arc<dyn IdGenerator>,
        stemmer: Arc<dyn WordStemmer>,
        ranker: Arc<dyn FuzzyRanker>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(DocumentStore::build(&config, ids, stemmer, ranker))
    }

    fn build(
        config: &StoreConfig,
        ids: Arc<dyn IdGenerator>,
        stemmer: Arc<dyn WordStemmer>,
        ranker: Arc<dyn FuzzyRanker>,
    ) -> Self {
        DocumentStore {
            docs: RwLock::new(HashMap::new()),
            registry: IndexRegistry::with_capabilities(config, stemmer, ranker),
            ids,
        }
    }

    /// Stores `payload` under a freshly generated id and returns the id
    pub fn add(&self, payload: T) -> String {
        let id = self.ids.generate();
        self.add_with_id(&id, payload);
        id
    }

    /// Stores `payload` under `id`, replacing any document already there
    pub fn add_with_id(&self, id: &str, payload: T) {
        let mut router = Router::new();
        payload.route(&mut router);
        let routes = router.into_routes();

        let mut pending = Vec::with_capacity(routes.len());
        for route in &routes {
            let (name, index) = match &route.destination {
                Destination::Default => (self.registry.default_name(), self.registry.default_index()),
                Destination::Named(name) => (name.as_str(), self.registry.get_or_create(name)),
            };
            let tokens = index.analyze(&route.text);
            pending.push((name, index, tokens));
        }

        let mut docs = self.docs.write();

        if let Some(previous) = docs.remove(id) {
            debug!(id, "replacing document");
            self.unindex(id, &previous.record_locator);
        }

        let mut record_locator = HashSet::new();
        for (name, index, tokens) in pending {
            if index.add_tokens(tokens, id) > 0 && !record_locator.contains(name) {
                record_locator.insert(name.to_string());
            }
        }

        debug!(id, routes = routes.len(), indices = record_locator.len(), "added document");
        docs.insert(id.to_string(), Document {
            payload: Arc::new(payload),
            record_locator,
        });
    }

    pub fn get(&self, id: &str) -> Result<Arc<T>> {
        self.docs
            .read()
            .get(id)
            .map(|doc| doc.payload.clone())
            .ok_or_else(|| Error::ref_not_found(id))
    }

    /// Removes the document and all of its postings
    pub fn remove(&self, id: &str) -> Result<()> {
        let mut docs = self.docs.write();
        let doc = docs.get(id).ok_or_else(|| Error::ref_not_found(id))?;

        self.unindex(id, &doc.record_locator);
        docs.remove(id);

        debug!(id, "removed document");
        Ok(())
    }

    // Caller holds the document map write lock
    fn unindex(&self, id: &str, record_locator: &HashSet<String>) {
        for name in record_locator {
            match self.registry.get(name) {
                Ok(index) => {
                    let removed = index.remove(id);
                    trace!(id, index = name.as_str(), removed, "removed postings");
                }
                Err(err) => debug!(id, index = name.as_str(), %err, "record locator names a missing index"),
            }
        }
    }

    pub fn search(&self, word: &str, index: &str) -> Result<SearchResult<'_, T>> {
        let refs = self.registry.get(index)?.search(word);
        trace!(word, index, hits = refs.len(), "search");
        Ok(SearchResult::new(self, refs))
    }

    pub fn fuzzy_search(&self, word: &str, index: &str, distance: i32) -> Result<SearchResult<'_, T>> {
        let refs = self.registry.get(index)?.fuzzy_search(word, distance);
        trace!(word, index, distance, hits = refs.len(), "fuzzy search");
        Ok(SearchResult::new(self, refs))
    }

    /// Names of the indices holding postings of `id`, sorted
    pub fn record_locator(&self, id: &str) -> Result<Vec<String>> {
        let docs = self.docs.read();
        let doc = docs.get(id).ok_or_else(|| Error::ref_not_found(id))?;
        let mut names: Vec<String> = doc.record_locator.iter().cloned().collect();
        names.sort();
        Ok(names)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }

    pub fn registry(&self) -> &IndexRegistry {
        &self.registry
    }

    pub fn default_index(&self) -> Arc<InvertedIndex> {
        self.registry.default_index()
    }
}
