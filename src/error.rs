//! Error types for the word level analyzer.
//!
//! All failures surface to the immediate caller; the only tolerated
//! omissions are a missing level list at load time (logged warning) and
//! out-of-vocabulary tokens during analysis (silently dropped).

use std::io;

use thiserror::Error;

/// The main error type for analyzer operations.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// Startup configuration errors (no level data, bad lexicon, bind failure)
    #[error("configuration error: {0}")]
    Config(String),

    /// Synonym provider lookup failures
    #[error("lexicon lookup failed: {0}")]
    Lookup(String),

    /// Unrecognized CEFR level tag supplied by a caller
    #[error("unrecognized CEFR level tag: {0}")]
    InvalidLevel(String),

    /// I/O errors (reading level lists, lexicon files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalyzeError {
    /// Create a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        AnalyzeError::Config(message.into())
    }

    /// Create a lookup error.
    pub fn lookup<S: Into<String>>(message: S) -> Self {
        AnalyzeError::Lookup(message.into())
    }

    /// Create an invalid-level error.
    pub fn invalid_level<S: Into<String>>(tag: S) -> Self {
        AnalyzeError::InvalidLevel(tag.into())
    }
}

/// Result type alias for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzeError>;
