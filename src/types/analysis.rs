//! Per-word analysis result types

use serde::{Deserialize, Serialize};

use super::CefrLevel;

/// A synonym suggestion for an analyzed word.
///
/// The suggestion's level is always at or above the caller-supplied minimum,
/// and its word always differs from the analyzed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub level: CefrLevel,
    pub definition: String,
}

/// Analysis result for a single distinct word of the input text.
///
/// `suggestions` is present only when the word was gated in for synonym
/// lookup and at least one candidate qualified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    pub word: String,
    pub level: CefrLevel,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

impl WordAnalysis {
    /// Create an entry with no suggestions
    pub fn new(word: String, level: CefrLevel, count: usize) -> Self {
        Self {
            word,
            level,
            count,
            suggestions: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_field_omitted_when_none() {
        let entry = WordAnalysis::new("cat".to_string(), CefrLevel::A1, 2);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"word":"cat","level":"A1","count":2}"#);
    }

    #[test]
    fn test_suggestions_field_serialized_when_present() {
        let mut entry = WordAnalysis::new("cat".to_string(), CefrLevel::A1, 1);
        entry.suggestions = Some(vec![Suggestion {
            word: "feline".to_string(),
            level: CefrLevel::C1,
            definition: "a small domesticated carnivore".to_string(),
        }]);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"suggestions\""));
        assert!(json.contains("\"feline\""));
    }
}
