use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::filters::stemmer::{SnowballStemmer, WordStemmer};
use crate::core::config::IndexConfig;
use crate::index::posting::PostingList;
use crate::search::fuzzy::{FuzzyRanker, SubsequenceRanker};

/// Thread-safe inverted index: token -> references.
///
/// Reads take the shared lock for the whole lookup or scan, writes take the
/// exclusive lock for the whole mutation. A token never maps to an empty list.
pub struct InvertedIndex {
    postings: RwLock<HashMap<String, PostingList>>,
    analyzer: Analyzer,
    ranker: Arc<dyn FuzzyRanker>,
    config: IndexConfig,
}

impl Default for InvertedIndex {
    fn default() -> Self {
        InvertedIndex::new(IndexConfig::default())
    }
}

impl InvertedIndex {
    pub fn new(config: IndexConfig) -> Self {
        InvertedIndex::with_capabilities(config, Arc::new(SnowballStemmer), Arc::new(SubsequenceRanker))
    }

    pub fn with_capabilities(
        config: IndexConfig,
        stemmer: Arc<dyn WordStemmer>,
        ranker: Arc<dyn FuzzyRanker>,
    ) -> Self {
        InvertedIndex {
            postings: RwLock::new(HashMap::new()),
            analyzer: Analyzer::with_stemmer(&config, stemmer),
            ranker,
            config,
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Indexes every retained token of `sentence` under `reference`.
    /// Returns the number of postings written.
    pub fn add(&self, sentence: &str, reference: &str) -> usize {
        self.add_tokens(self.analyze(sentence), reference)
    }

    /// Tokens `add` would write for `sentence`; takes no lock
    pub fn analyze(&self, sentence: &str) -> Vec<String> {
        self.analyzer.analyze(sentence)
    }

    /// Writes already analyzed tokens under `reference`
    pub fn add_tokens(&self, tokens: Vec<String>, reference: &str) -> usize {
        if tokens.is_empty() {
            return 0;
        }

        let mut postings = self.postings.write();
        let added = tokens.len();
        for token in tokens {
            postings.entry(token)
                .or_insert_with(PostingList::new)
                .push(reference);
        }
        added
    }

    /// Exact lookup, case-insensitive
    pub fn search(&self, word: &str) -> Vec<String> {
        let Some(token) = self.analyzer.normalize_query(word) else {
            return Vec::new();
        };

        let postings = self.postings.read();
        postings.get(&token)
            .map(|list| list.as_slice().to_vec())
            .unwrap_or_default()
    }

    /// Union of the posting lists of every token ranked within `distance`.
    /// A distance of zero or less is an exact `search`.
    pub fn fuzzy_search(&self, word: &str, distance: i32) -> Vec<String> {
        if distance <= 0 {
            return self.search(word);
        }
        let Some(query) = self.analyzer.normalize_query(word) else {
            return Vec::new();
        };

        let postings = self.postings.read();
        let mut refs = Vec::new();
        for (token, list) in postings.iter() {
            match self.ranker.rank(&query, token) {
                Some(rank) if i64::from(rank) <= i64::from(distance) => {
                    refs.extend_from_slice(list.as_slice());
                }
                _ => {}
            }
        }
        refs
    }

    /// Removes every posting of `reference`, dropping tokens left empty.
    /// Returns the number of postings removed.
    pub fn remove(&self, reference: &str) -> usize {
        let mut postings = self.postings.write();
        let mut removed = 0;

        postings.retain(|_token, list| {
            removed += list.remove_all(reference);
            !list.is_empty()
        });

        removed
    }

    /// Discards all tokens
    pub fn reset(&self) {
        let mut postings = self.postings.write();
        *postings = HashMap::new();
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.postings.read().contains_key(token)
    }

    pub fn token_count(&self) -> usize {
        self.postings.read().len()
    }

    /// Total references over all posting lists
    pub fn posting_count(&self) -> usize {
        self.postings.read().values().map(PostingList::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.read().is_empty()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.postings.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fuzzy::EditDistanceRanker;

    struct Case {
        name: &'static str,
        config: IndexConfig,
        data: &'static [&'static str],
        search: &'static str,
        distance: i32,
        hits: usize,
    }

    #[test]
    fn test_add_tokens_matches_add() {
        let index = InvertedIndex::new(IndexConfig::new().with_stemming());
        let tokens = index.analyze("Build 42 mp3 players");
        assert_eq!(tokens, vec!["build", "42", "mp3", "player"]);
        assert_eq!(index.token_count(), 0);

        assert_eq!(index.add_tokens(tokens, "1"), 4);
        assert_eq!(index.add("Build 42 mp3 players", "2"), 4);
        assert_eq!(index.search("42"), vec!["1", "2"]);
        assert_eq!(index.search("players"), vec!["1", "2"]);
        assert_eq!(index.add_tokens(Vec::new(), "3"), 0);
    }

    #[test]
    fn test_stemming_indexes_numbers() {
        let index = InvertedIndex::new(IndexConfig::new().with_stemming());
        index.add("Build 42 of x86", "1");
        assert_eq!(index.search("42"), vec!["1"]);
        assert_eq!(index.search("X86"), vec!["1"]);

        let plain = InvertedIndex::default();
        plain.add("Build 42 of x86", "1");
        assert!(plain.search("42").is_empty());
        assert_eq!(plain.search("x86"), vec!["1"]);
    }

    #[test]
    fn test_add_and_search() {
        let cases = [
            Case {
                name: "basic",
                config: IndexConfig::new(),
                data: &["Basic testing"],
                search: "testing",
                distance: 0,
                hits: 1,
            },
            Case {
                name: "stop word disabled",
                config: IndexConfig::new(),
                data: &["So testing some stop words"],
                search: "some",
                distance: 0,
                hits: 0,
            },
            Case {
                name: "stop word enabled",
                config: IndexConfig::new().with_stop_words(),
                data: &["So testing some stop words"],
                search: "some",
                distance: 0,
                hits: 1,
            },
            Case {
                name: "short stop word enabled",
                config: IndexConfig::new().with_stop_words().with_short_words(),
                data: &["So testing some stop words"],
                search: "so",
                distance: 0,
                hits: 1,
            },
            Case {
                name: "stemming enabled",
                config: IndexConfig::new().with_stemming(),
                data: &["There are too many cats!"],
                search: "cat",
                distance: 0,
                hits: 1,
            },
            Case {
                name: "stemming enabled with simplification",
                config: IndexConfig::new().with_stemming(),
                data: &["There are too many cats!"],
                search: "many",
                distance: 0,
                hits: 1,
            },
            Case {
                name: "stemming enabled with simplification as input",
                config: IndexConfig::new().with_stemming(),
                data: &["There are too many cats!"],
                search: "mani",
                distance: 0,
                hits: 1,
            },
            Case {
                name: "fuzzy search disabled",
                config: IndexConfig::new(),
                data: &["Can we have a dog please?"],
                search: "pls",
                distance: 0,
                hits: 0,
            },
            Case {
                name: "fuzzy search enabled",
                config: IndexConfig::new(),
                data: &["Can we have a dog please?"],
                search: "pls",
                distance: 5,
                hits: 1,
            },
            Case {
                name: "fuzzy search and stemming enabled",
                config: IndexConfig::new().with_stemming(),
                data: &["Please check all the accumulators"],
                search: "accumulator",
                distance: 5,
                hits: 1,
            },
            Case {
                name: "fuzzy search below rank",
                config: IndexConfig::new(),
                data: &["Can we have a dog please?"],
                search: "pls",
                distance: 2,
                hits: 0,
            },
        ];

        for case in cases {
            let index = InvertedIndex::new(case.config);
            for (i, sentence) in case.data.iter().enumerate() {
                index.add(sentence, &i.to_string());
            }
            let result = index.fuzzy_search(case.search, case.distance);
            assert_eq!(result.len(), case.hits, "case '{}': {:?}", case.name, result);
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let index = InvertedIndex::new(IndexConfig::new());
        index.add("Lorem IPSUM dolor", "1");
        assert_eq!(index.search("ipsum"), vec!["1"]);
        assert_eq!(index.search("IPSUM"), vec!["1"]);
        assert_eq!(index.search("Ipsum!"), vec!["1"]);
    }

    #[test]
    fn test_duplicate_references_are_kept() {
        let index = InvertedIndex::new(IndexConfig::new());
        index.add("echo echo", "1");
        assert_eq!(index.add("echo", "1"), 1);
        assert_eq!(index.add("a the ?", "1"), 0);
        assert_eq!(index.search("echo"), vec!["1", "1", "1"]);
    }

    #[test]
    fn test_remove() {
        let index = InvertedIndex::new(IndexConfig::new());
        index.add("Some testing data", "1");
        assert_eq!(index.remove("1"), 2);
        assert!(index.search("testing").is_empty());
        assert!(index.is_empty());

        index.add("Some testing data", "2");
        index.add("Some testing data", "3");
        index.remove("2");
        assert_eq!(index.search("testing"), vec!["3"]);
        assert_eq!(index.search("data"), vec!["3"]);
    }

    #[test]
    fn test_remove_drops_empty_tokens() {
        let index = InvertedIndex::new(IndexConfig::new());
        index.add("alpha beta", "1");
        index.add("beta gamma", "2");

        index.remove("1");
        assert!(!index.contains_token("alpha"));
        assert!(index.contains_token("beta"));
        assert_eq!(index.token_count(), 2);

        // a removed token must not show up as an empty fuzzy match
        assert!(index.fuzzy_search("alp", 10).is_empty());
    }

    #[test]
    fn test_remove_unknown_reference() {
        let index = InvertedIndex::new(IndexConfig::new());
        index.add("alpha", "1");
        assert_eq!(index.remove("2"), 0);
        assert_eq!(index.posting_count(), 1);
    }

    #[test]
    fn test_reset() {
        let index = InvertedIndex::new(IndexConfig::new());
        index.add("Some testing data", "1");
        index.reset();
        assert!(index.search("testing").is_empty());
        assert_eq!(index.token_count(), 0);

        index.add("fresh start", "2");
        assert_eq!(index.search("fresh"), vec!["2"]);
    }

    #[test]
    fn test_fuzzy_zero_and_negative_are_exact() {
        let index = InvertedIndex::new(IndexConfig::new());
        index.add("Lorem ipsum dolor", "1");
        index.add("ipsum again", "2");

        let exact = index.search("ipsum");
        assert_eq!(index.fuzzy_search("ipsum", 0), exact);
        assert_eq!(index.fuzzy_search("ipsum", -3), exact);
        assert!(index.fuzzy_search("ips", 0).is_empty());
        assert_eq!(index.fuzzy_search("ips", 2).len(), 2);
    }

    #[test]
    fn test_fuzzy_union_is_not_deduplicated() {
        let index = InvertedIndex::new(IndexConfig::new());
        index.add("testing tester", "1");

        let mut refs = index.fuzzy_search("test", 3);
        refs.sort();
        assert_eq!(refs, vec!["1", "1"]);
    }

    #[test]
    fn test_custom_ranker() {
        let index = InvertedIndex::with_capabilities(
            IndexConfig::new(),
            Arc::new(SnowballStemmer),
            Arc::new(EditDistanceRanker::default()),
        );
        index.add("the quick brown fox", "1");
        assert_eq!(index.fuzzy_search("quikc", 1), vec!["1"]);
        assert!(index.fuzzy_search("qu", 1).is_empty());
    }

    #[test]
    fn test_empty_query() {
        let index = InvertedIndex::new(IndexConfig::new());
        index.add("anything", "1");
        assert!(index.search("").is_empty());
        assert!(index.search("?!").is_empty());
        assert!(index.fuzzy_search("", 100).is_empty());
    }
}
