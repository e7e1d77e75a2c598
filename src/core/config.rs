use serde::{Deserialize, Serialize};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::routing::FieldTag;

pub const DEFAULT_INDEX_NAME: &str = "default";

/// Normalization policy of a single index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub stemming: bool,
    pub keep_stop_words: bool,
    /// Has no effect on words the stemmer recognizes
    pub keep_short_words: bool,
}

impl IndexConfig {
    pub fn new() -> Self {
        IndexConfig::default()
    }

    pub fn with_stemming(mut self) -> Self {
        self.stemming = true;
        self
    }

    pub fn with_stop_words(mut self) -> Self {
        self.keep_stop_words = true;
        self
    }

    pub fn with_short_words(mut self) -> Self {
        self.keep_short_words = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedIndexConfig {
    pub name: String,
    #[serde(flatten)]
    pub config: IndexConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub default_index_name: String,
    pub default_index: IndexConfig,   // Policy of the default index
    pub indices: Vec<NamedIndexConfig>, // Created eagerly next to the default index
    pub auto_index: IndexConfig,      // Policy of indices created by tagged routing
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            default_index_name: DEFAULT_INDEX_NAME.to_string(),
            default_index: IndexConfig::default(),
            indices: Vec::new(),
            auto_index: IndexConfig::default(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        StoreConfig::default()
    }

    /// Renames the default index and sets its policy
    pub fn with_default_index(mut self, name: &str, config: IndexConfig) -> Self {
        self.default_index_name = name.to_string();
        self.default_index = config;
        self
    }

    pub fn with_index(mut self, name: &str, config: IndexConfig) -> Self {
        self.indices.push(NamedIndexConfig {
            name: name.to_string(),
            config,
        });
        self
    }

    pub fn with_auto_index(mut self, config: IndexConfig) -> Self {
        self.auto_index = config;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Index names follow the same rules as field tags
    pub fn validate(&self) -> Result<()> {
        let names = std::iter::once(self.default_index_name.as_str())
            .chain(self.indices.iter().map(|index| index.name.as_str()));

        for name in names {
            match FieldTag::parse(name) {
                Some(tag) if tag.name() == name => {}
                _ => {
                    return Err(Error::new(
                        ErrorKind::InvalidArgument,
                        format!("'{}' is not a valid index name", name),
                    ));
                }
            }
        }
        Ok(())
    }
}
