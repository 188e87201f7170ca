//! Text Analyzer - per-request word level analysis
//!
//! A pure transformation over (input text, level table, synonym provider,
//! minimum level): tokenize, count occurrences, look up levels, fetch
//! synonym suggestions for qualifying words, and return entries sorted by
//! (level, word). No state is retained across calls; concurrent calls share
//! only the immutable table and lexicon.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use regex::Regex;

use crate::error::{AnalyzeError, Result};
use crate::levels::LevelTable;
use crate::lexicon::SynonymProvider;
use crate::types::{CefrLevel, Suggestion, WordAnalysis};

/// Minimum suggestion level applied when a request does not specify one.
pub const DEFAULT_MIN_SYNONYM_LEVEL: CefrLevel = CefrLevel::A2;

/// Word level analyzer bound to a level table and a synonym provider.
///
/// Constructed once at startup and shared read-only across requests.
pub struct Analyzer {
    levels: Arc<LevelTable>,
    lexicon: Arc<dyn SynonymProvider>,
    /// Tokens are maximal runs of word characters
    word_pattern: Regex,
}

impl Analyzer {
    /// Create an analyzer over the given table and provider.
    pub fn new(levels: Arc<LevelTable>, lexicon: Arc<dyn SynonymProvider>) -> Result<Self> {
        let word_pattern = Regex::new(r"\w+")
            .map_err(|e| AnalyzeError::config(format!("invalid token pattern: {e}")))?;

        Ok(Self {
            levels,
            lexicon,
            word_pattern,
        })
    }

    /// The level table this analyzer reads from.
    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    /// Analyze a text and return one entry per distinct in-vocabulary word,
    /// sorted by (level ascending, word ascending).
    ///
    /// Synonym suggestions are fetched only for words at the lowest tier or
    /// with more than one occurrence; candidates below `min_synonym_level`
    /// are filtered out. Tokens absent from the level table are dropped.
    pub fn analyze(&self, text: &str, min_synonym_level: CefrLevel) -> Result<Vec<WordAnalysis>> {
        let mut entries = Vec::new();

        for (word, count) in self.count_tokens(text) {
            let Some(level) = self.levels.get(&word) else {
                continue; // out-of-vocabulary
            };

            let mut entry = WordAnalysis::new(word, level, count);

            if level == CefrLevel::A1 || count > 1 {
                let suggestions = self.suggest(&entry.word, min_synonym_level)?;
                if !suggestions.is_empty() {
                    entry.suggestions = Some(suggestions);
                }
            }

            entries.push(entry);
        }

        entries.sort_by(|a, b| (a.level, &a.word).cmp(&(b.level, &b.word)));
        Ok(entries)
    }

    /// Lowercase the text and count occurrences per distinct token.
    fn count_tokens(&self, text: &str) -> HashMap<String, usize> {
        let lowered = text.to_lowercase();
        let mut counts = HashMap::new();

        for token in self.word_pattern.find_iter(&lowered) {
            *counts.entry(token.as_str().to_string()).or_insert(0) += 1;
        }

        counts
    }

    /// Collect qualifying synonym suggestions for `word`.
    ///
    /// Underscore-joined multi-word forms are normalized to spaces, the
    /// candidate set is deduplicated, the word itself is excluded, and a
    /// candidate survives only if the level table knows it at or above
    /// `min_level`. Provider failures propagate unchanged.
    fn suggest(&self, word: &str, min_level: CefrLevel) -> Result<Vec<Suggestion>> {
        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();

        for candidate in self.lexicon.lookup(word)? {
            let form = candidate.form.replace('_', " ");
            if form == word || !seen.insert(form.clone()) {
                continue;
            }

            let Some(level) = self.levels.get(&form.to_lowercase()) else {
                continue;
            };
            if level < min_level {
                continue;
            }

            suggestions.push(Suggestion {
                word: form,
                level,
                definition: candidate.definition,
            });
        }

        // Deterministic output for identical inputs
        suggestions.sort_by(|a, b| a.word.cmp(&b.word));
        Ok(suggestions)
    }
}
