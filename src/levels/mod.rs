//! Level Table - CEFR reference list loader
//!
//! Builds the word → level mapping once at process start from the per-level
//! reference lists (`a1.csv` … `c1.csv`). The table is immutable after
//! construction and shared read-only across requests.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::CefrLevel;

/// Immutable mapping from lowercase word to its highest observed CEFR level.
pub struct LevelTable {
    levels: HashMap<String, CefrLevel>,
}

impl LevelTable {
    /// Load the table from a directory containing the per-level word lists.
    ///
    /// Each list is a two-column `word|LEVEL` file whose header row is
    /// skipped. Lists are read lowest level first; a word appearing in more
    /// than one list keeps the highest level observed. A missing list is
    /// logged and skipped rather than failing the whole load.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut levels = HashMap::new();

        for level in CefrLevel::ALL {
            let path = dir.join(level.list_file());
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(_) => {
                    tracing::warn!("level list {} not found, skipping", path.display());
                    continue;
                }
            };

            for line in content.lines().skip(1) {
                let parts: Vec<&str> = line.trim().split('|').collect();
                if parts.len() < 2 {
                    continue;
                }
                let Some(parsed) = CefrLevel::from_str(parts[1]) else {
                    continue;
                };
                Self::insert_higher(&mut levels, parts[0].to_lowercase(), parsed);
            }
        }

        Ok(Self { levels })
    }

    /// Build a table from explicit (word, level) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, CefrLevel)>,
        S: Into<String>,
    {
        let mut levels = HashMap::new();
        for (word, level) in pairs {
            Self::insert_higher(&mut levels, word.into().to_lowercase(), level);
        }
        Self { levels }
    }

    /// Insert a word, replacing an existing entry only with a higher level.
    /// Ordinal comparison over [`CefrLevel`], never over the tag strings.
    fn insert_higher(levels: &mut HashMap<String, CefrLevel>, word: String, level: CefrLevel) {
        match levels.entry(word) {
            Entry::Occupied(mut entry) => {
                if level > *entry.get() {
                    entry.insert(level);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(level);
            }
        }
    }

    /// Get the level for a word (expects a lowercase key)
    pub fn get(&self, word: &str) -> Option<CefrLevel> {
        self.levels.get(word).copied()
    }

    /// Number of words in the table
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True if no level data was loaded
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_lowercases_words() {
        let table = LevelTable::from_pairs([("Cat", CefrLevel::A1), ("DOG", CefrLevel::B1)]);
        assert_eq!(table.get("cat"), Some(CefrLevel::A1));
        assert_eq!(table.get("dog"), Some(CefrLevel::B1));
        assert_eq!(table.get("Cat"), None);
    }

    #[test]
    fn test_conflict_keeps_higher_level() {
        let table = LevelTable::from_pairs([
            ("word", CefrLevel::A2),
            ("word", CefrLevel::B1),
            ("other", CefrLevel::C1),
            ("other", CefrLevel::A1),
        ]);
        assert_eq!(table.get("word"), Some(CefrLevel::B1));
        assert_eq!(table.get("other"), Some(CefrLevel::C1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_skips_header_and_malformed_rows() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("a1.csv"),
            "headword|level\ncat|A1\nbroken line\nmat|X9\nthe|A1\n",
        )
        .unwrap();

        let table = LevelTable::load_from_dir(dir.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("cat"), Some(CefrLevel::A1));
        assert_eq!(table.get("the"), Some(CefrLevel::A1));
        // header row, short row and unknown tag are all skipped
        assert_eq!(table.get("headword"), None);
        assert_eq!(table.get("mat"), None);
    }

    #[test]
    fn test_load_tolerates_missing_lists() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b2.csv"), "word|level\nnevertheless|B2\n").unwrap();

        // Only one of the five lists exists
        let table = LevelTable::load_from_dir(dir.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("nevertheless"), Some(CefrLevel::B2));
    }

    #[test]
    fn test_load_trusts_row_tags_over_file_names() {
        let dir = tempfile::tempdir().unwrap();
        // a row in a2.csv can still carry a different tag
        fs::write(dir.path().join("a2.csv"), "word|level\nrun|B1\n").unwrap();

        let table = LevelTable::load_from_dir(dir.path()).unwrap();
        assert_eq!(table.get("run"), Some(CefrLevel::B1));
    }

    #[test]
    fn test_empty_dir_yields_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let table = LevelTable::load_from_dir(dir.path()).unwrap();
        assert!(table.is_empty());
    }
}
