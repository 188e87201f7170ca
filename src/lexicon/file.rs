//! File-backed lexicon
//!
//! Loads a WordNet-style export once at startup: a JSON-lines file with one
//! object per word, each carrying that word's synsets (lemma groups plus a
//! sense definition). Read-only after load.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{SynonymCandidate, SynonymProvider};
use crate::error::Result;

/// One sense of a word: its member lemmas and the sense definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Synset {
    #[serde(default)]
    pub lemmas: Vec<String>,
    #[serde(default)]
    pub definition: String,
}

/// A lexicon entry as stored in the file, one per line.
#[derive(Debug, Clone, Deserialize)]
struct LexiconRecord {
    word: String,
    #[serde(default)]
    synsets: Vec<Synset>,
}

/// In-memory lexicon loaded from a JSON-lines file.
pub struct FileLexicon {
    entries: HashMap<String, Vec<Synset>>,
}

impl FileLexicon {
    /// Load the lexicon from a JSON-lines file.
    ///
    /// Blank and malformed lines are skipped, matching the tolerant load
    /// behavior of the level lists.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut entries = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Ok(record) = serde_json::from_str::<LexiconRecord>(line) {
                if !record.word.is_empty() {
                    entries.insert(record.word.to_lowercase(), record.synsets);
                }
            }
        }

        Ok(Self { entries })
    }

    /// Build a lexicon from explicit entries.
    pub fn from_entries<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Synset>)>,
        S: Into<String>,
    {
        let entries = items
            .into_iter()
            .map(|(word, synsets)| (word.into().to_lowercase(), synsets))
            .collect();
        Self { entries }
    }

    /// Number of words in the lexicon
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the lexicon holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SynonymProvider for FileLexicon {
    fn lookup(&self, word: &str) -> Result<Vec<SynonymCandidate>> {
        let Some(synsets) = self.entries.get(&word.to_lowercase()) else {
            return Ok(Vec::new());
        };

        // Every candidate carries the word's first sense definition,
        // not its own.
        let definition = synsets
            .first()
            .map(|synset| synset.definition.clone())
            .unwrap_or_default();

        let candidates = synsets
            .iter()
            .flat_map(|synset| synset.lemmas.iter())
            .map(|lemma| SynonymCandidate {
                form: lemma.clone(),
                definition: definition.clone(),
            })
            .collect();

        Ok(candidates)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synset(lemmas: &[&str], definition: &str) -> Synset {
        Synset {
            lemmas: lemmas.iter().map(|s| s.to_string()).collect(),
            definition: definition.to_string(),
        }
    }

    #[test]
    fn test_lookup_unknown_word_is_empty() {
        let lexicon = FileLexicon::from_entries::<_, String>([]);
        assert!(lexicon.lookup("anything").unwrap().is_empty());
    }

    #[test]
    fn test_lookup_uses_first_sense_definition_for_all_candidates() {
        let lexicon = FileLexicon::from_entries([(
            "happy",
            vec![
                synset(&["glad", "felicitous"], "enjoying or showing joy"),
                synset(&["well_chosen"], "marked by good fortune"),
            ],
        )]);

        let candidates = lexicon.lookup("happy").unwrap();
        assert_eq!(candidates.len(), 3);
        assert!(candidates
            .iter()
            .all(|c| c.definition == "enjoying or showing joy"));
        assert!(candidates.iter().any(|c| c.form == "well_chosen"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon = FileLexicon::from_entries([("Run", vec![synset(&["sprint"], "move fast")])]);
        let candidates = lexicon.lookup("RUN").unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].form, "sprint");
    }

    #[test]
    fn test_load_skips_blank_and_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.jsonl");
        fs::write(
            &path,
            concat!(
                r#"{"word":"cat","synsets":[{"lemmas":["kitty"],"definition":"a small cat"}]}"#,
                "\n\n",
                "not json\n",
                r#"{"word":"","synsets":[]}"#,
                "\n",
                r#"{"word":"dog","synsets":[]}"#,
                "\n",
            ),
        )
        .unwrap();

        let lexicon = FileLexicon::load(&path).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.lookup("cat").unwrap().len(), 1);
        assert!(lexicon.lookup("dog").unwrap().is_empty());
    }
}
