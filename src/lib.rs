pub mod core;
pub mod analysis;
pub mod index;
pub mod search;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                            SPYGLASS STRUCT ARCHITECTURE                      │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── CORE LAYER ──────────────────────────────────┐
│                                                                              │
│  ┌────────────────────────────────────────────────────────────────────────┐  │
│  │                      struct DocumentStore<T>                           │  │
│  │  docs: RwLock<HashMap<String, Document<T>>>  // id → payload + locator │  │
│  │  registry: IndexRegistry                     // name → InvertedIndex   │  │
│  │  ids: Arc<dyn IdGenerator>                   // UuidGenerator default  │  │
│  └────────────────────────────────────────────────────────────────────────┘  │
│                                                                              │
│  ┌──────────────────────┐  ┌──────────────────────┐  ┌────────────────────┐  │
│  │ trait Indexable      │  │ struct Router        │  │ struct StoreConfig │  │
│  │ • route(&Router)     │  │ • text / field(s)    │  │ • default_index_*  │  │
│  │ macro indexable!     │  │ • nested(_all)       │  │ • indices          │  │
│  └──────────────────────┘  └──────────────────────┘  │ • auto_index       │  │
│                                                      └────────────────────┘  │
└──────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── INDEXING LAYER ────────────────────────────────┐
│                                                                              │
│  ┌──────────────────────────────┐   ┌─────────────────────────────────────┐  │
│  │ struct IndexRegistry         │   │ struct InvertedIndex                │  │
│  │ • RwLock<HashMap<name, Arc>> │──▶│ • RwLock<HashMap<token, Posting..>> │  │
│  │ • default index, eager       │   │ • analyzer: Analyzer                │  │
│  │ • tagged indices, lazy       │   │ • ranker: Arc<dyn FuzzyRanker>      │  │
│  └──────────────────────────────┘   └─────────────────────────────────────┘  │
└──────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── ANALYSIS LAYER ────────────────────────────────┐
│  SpaceTokenizer ──▶ WordStemmer (Snowball) ──▶ ShortWordFilter ──▶ StopWords  │
│                     recognized stem skips both filters                       │
└──────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── SEARCH LAYER ─────────────────────────────────┐
│  SearchResult<'a, T>: refs + &DocumentStore, collect() fails on stale refs    │
│  FuzzyRanker: SubsequenceRanker (default), EditDistanceRanker                │
└──────────────────────────────────────────────────────────────────────────────┘
*/
