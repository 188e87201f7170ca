//! Shared application state

use crate::analyzer::Analyzer;

/// Shared application state for HTTP handlers.
///
/// Holds the analyzer, which in turn owns the immutable level table and
/// lexicon; handlers only ever read it, so no locking is needed.
pub struct AppState {
    /// The word level analyzer
    pub analyzer: Analyzer,
}

impl AppState {
    /// Create a new AppState with the given analyzer
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    /// Number of words in the loaded level table
    pub fn word_count(&self) -> usize {
        self.analyzer.levels().len()
    }
}
