//! Word Level Analyzer
//!
//! An HTTP service that tags words in English text with CEFR proficiency
//! levels (A1 < A2 < B1 < B2 < C1) and suggests synonyms at or above a
//! caller-specified minimum level.
//!
//! # Features
//!
//! - **Level Table**: word → level mapping built once at startup from the
//!   per-level reference lists, keeping the highest level on conflicts
//! - **Text Analyzer**: pure, stateless per-request analysis (tokenize,
//!   count, look up, suggest, sort)
//! - **Pluggable Lexicon**: synonym/definition lookup behind a capability
//!   trait, shipped with a file-backed WordNet-style implementation
//! - **Thin Transport**: Axum REST adapter with `/analyze` and `/health`
//!
//! # Modules
//!
//! - `types`: Core data structures (CefrLevel, WordAnalysis, Suggestion)
//! - `levels`: Level table loader
//! - `lexicon`: Synonym provider trait and file-backed lexicon
//! - `analyzer`: The word level analyzer
//! - `api`: HTTP transport (router, handlers, shared state)
//! - `config`: Environment-based configuration
//! - `error`: Error taxonomy and `Result` alias
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wordlevel::{Analyzer, CefrLevel, FileLexicon, LevelTable};
//!
//! let table = LevelTable::from_pairs([("cat", CefrLevel::A1), ("mat", CefrLevel::B1)]);
//! let lexicon = FileLexicon::from_entries::<_, String>([]);
//! let analyzer = Analyzer::new(Arc::new(table), Arc::new(lexicon)).unwrap();
//!
//! let result = analyzer.analyze("The cat sat on the mat.", CefrLevel::A2).unwrap();
//! assert_eq!(result[0].word, "cat");
//! ```

pub mod analyzer;
pub mod api;
pub mod config;
pub mod error;
pub mod levels;
pub mod lexicon;
pub mod types;

// Re-export commonly used items at crate root
pub use analyzer::{Analyzer, DEFAULT_MIN_SYNONYM_LEVEL};
pub use config::Config;
pub use error::{AnalyzeError, Result};
pub use levels::LevelTable;
pub use lexicon::{FileLexicon, SynonymCandidate, SynonymProvider, Synset};
pub use types::{CefrLevel, Suggestion, WordAnalysis};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
