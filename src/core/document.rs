//! The assembled puzzle document handed to the external writer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Clue text keyed by slot number, one map per orientation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueSet {
    pub across: BTreeMap<u32, String>,
    pub down: BTreeMap<u32, String>,
}

impl ClueSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    /// Every clue string, across before down
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.across.values().chain(self.down.values()).map(String::as_str)
    }
}

/// Provenance section of the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleMeta {
    pub source_urls: Vec<String>,
}

/// A finished mini crossword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDocument {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub size: usize,
    /// Row-major letters, `#` for blocked cells
    pub grid: Vec<String>,
    pub clues: ClueSet,
    pub meta: PuzzleMeta,
}

impl PuzzleDocument {
    /// Grid rows as strings, e.g. `RADIO`
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.grid
            .chunks(self.size.max(1))
            .map(|row| row.concat())
            .collect()
    }

    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
