//! CEFR proficiency level tags

use serde::{Deserialize, Serialize};

/// CEFR proficiency level, ordered A1 < A2 < B1 < B2 < C1.
///
/// Comparison is ordinal over the enum discriminants. The five current tags
/// happen to sort the same way as strings, but that is a coincidence of
/// spelling and must not be relied on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CefrLevel {
    A1, // Beginner
    A2, // Elementary
    B1, // Intermediate
    B2, // Upper intermediate
    C1, // Advanced
}

impl CefrLevel {
    /// All levels, lowest to highest.
    pub const ALL: [CefrLevel; 5] = [
        CefrLevel::A1,
        CefrLevel::A2,
        CefrLevel::B1,
        CefrLevel::B2,
        CefrLevel::C1,
    ];

    /// Parse level from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "A1" => Some(CefrLevel::A1),
            "A2" => Some(CefrLevel::A2),
            "B1" => Some(CefrLevel::B1),
            "B2" => Some(CefrLevel::B2),
            "C1" => Some(CefrLevel::C1),
            _ => None,
        }
    }

    /// Get level string
    pub fn as_str(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
        }
    }

    /// Get level description
    pub fn description(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1 (Beginner)",
            CefrLevel::A2 => "A2 (Elementary)",
            CefrLevel::B1 => "B1 (Intermediate)",
            CefrLevel::B2 => "B2 (Upper Intermediate)",
            CefrLevel::C1 => "C1 (Advanced)",
        }
    }

    /// Name of the reference word list this level is loaded from
    pub fn list_file(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "a1.csv",
            CefrLevel::A2 => "a2.csv",
            CefrLevel::B1 => "b1.csv",
            CefrLevel::B2 => "b2.csv",
            CefrLevel::C1 => "c1.csv",
        }
    }
}
