//! Lexical database access
//!
//! The synonym/definition source is an external read-only collaborator.
//! It sits behind the [`SynonymProvider`] capability trait so the backing
//! implementation can be swapped or mocked; the analyzer never assumes a
//! particular backend.

mod file;

pub use file::{FileLexicon, Synset};

use crate::error::Result;

/// An alternate word form related to a looked-up word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymCandidate {
    /// The alternate form. Multi-word forms may be underscore-joined,
    /// as stored by WordNet-style lexicons.
    pub form: String,
    /// Sense definition accompanying the candidate (may be empty).
    pub definition: String,
}

/// Trait for synonym lookup backends.
pub trait SynonymProvider: Send + Sync {
    /// Look up all alternate word forms related to `word`.
    ///
    /// Returns an empty vector for unknown words. No ordering guarantee.
    /// Failures propagate to the caller as request-level failures.
    fn lookup(&self, word: &str) -> Result<Vec<SynonymCandidate>>;

    /// Get the name of this provider (for startup logging).
    fn name(&self) -> &'static str;
}
