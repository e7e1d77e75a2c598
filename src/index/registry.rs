use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use tracing::debug;
use crate::analysis::filters::stemmer::{SnowballStemmer, WordStemmer};
use crate::core::config::{IndexConfig, StoreConfig};
use crate::core::error::{Error, Result};
use crate::index::inverted::InvertedIndex;
use crate::search::fuzzy::{FuzzyRanker, SubsequenceRanker};

/// Named indices of a store. The default index always exists.
pub struct IndexRegistry {
    indices: RwLock<HashMap<String, Arc<InvertedIndex>>>,
    default_name: String,
    auto_index: IndexConfig,
    stemmer: Arc<dyn WordStemmer>,
    ranker: Arc<dyn FuzzyRanker>,
}

impl IndexRegistry {
    pub fn new(config: &StoreConfig) -> Self {
        IndexRegistry::with_capabilities(config, Arc::new(SnowballStemmer), Arc::new(SubsequenceRanker))
    }

    pub fn with_capabilities(
        config: &StoreConfig,
        stemmer: Arc<dyn WordStemmer>,
        ranker: Arc<dyn FuzzyRanker>,
    ) -> Self {
        let registry = IndexRegistry {
            indices: RwLock::new(HashMap::new()),
            default_name: config.default_index_name.clone(),
            auto_index: config.auto_index,
            stemmer,
            ranker,
        };

        {
            let mut indices = registry.indices.write();
            for named in &config.indices {
                indices.insert(named.name.clone(), registry.build(named.config));
            }
            // the default index wins over an extra index of the same name
            indices.insert(config.default_index_name.clone(), registry.build(config.default_index));
        }

        registry
    }

    fn build(&self, config: IndexConfig) -> Arc<InvertedIndex> {
        Arc::new(InvertedIndex::with_capabilities(
            config,
            self.stemmer.clone(),
            self.ranker.clone(),
        ))
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn default_index(&self) -> Arc<InvertedIndex> {
        self.get_or_create(&self.default_name)
    }

    pub fn get(&self, name: &str) -> Result<Arc<InvertedIndex>> {
        self.indices
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::index_not_found(name))
    }

    /// Used by tagged routing; new indices get the auto-index policy
    pub fn get_or_create(&self, name: &str) -> Arc<InvertedIndex> {
        if let Some(index) = self.indices.read().get(name) {
            return index.clone();
        }

        let mut indices = self.indices.write();
        indices
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(index = name, "creating index on first tagged field");
                self.build(self.auto_index)
            })
            .clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indices.read().contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.indices.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.indices.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.read().is_empty()
    }

    /// Sum of `posting_count` over all indices, taken one index at a time
    pub fn posting_count(&self) -> usize {
        let indices: Vec<Arc<InvertedIndex>> = self.indices.read().values().cloned().collect();
        indices.iter().map(|index| index.posting_count()).sum()
    }
}
