use thiserror::Error;

use crate::model::ids::ItemId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyllableItemError {
    #[error("word cannot be empty")]
    EmptyWord,

    #[error("word must have at least one part")]
    NoParts,

    #[error("part {index} of '{word}' is empty")]
    EmptyPart { word: String, index: usize },

    #[error("parts of '{word}' join to '{joined}'")]
    PartsMismatch { word: String, joined: String },
}

//
// ─── SYLLABLE ITEM ─────────────────────────────────────────────────────────────
//

/// A word the learner breaks into its spoken chunks.
///
/// The stored parts are the one accepted split; rejoining them yields the
/// word exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableItem {
    id: ItemId,
    word: String,
    parts: Vec<String>,
}

impl SyllableItem {
    /// Creates a new syllable item.
    ///
    /// # Errors
    ///
    /// Returns `SyllableItemError` if the word or any part is blank, or if
    /// the parts do not rejoin to the word.
    pub fn new(
        id: ItemId,
        word: impl Into<String>,
        parts: Vec<String>,
    ) -> Result<Self, SyllableItemError> {
        let word = word.into();
        if word.trim().is_empty() {
            return Err(SyllableItemError::EmptyWord);
        }
        if parts.is_empty() {
            return Err(SyllableItemError::NoParts);
        }
        for (index, part) in parts.iter().enumerate() {
            if part.trim().is_empty() {
                return Err(SyllableItemError::EmptyPart { word, index });
            }
        }

        let joined = parts.concat();
        if joined != word {
            return Err(SyllableItemError::PartsMismatch { word, joined });
        }

        Ok(Self { id, word, parts })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Checks a candidate split against the accepted one, element for
    /// element. Candidate fields are trimmed and lowercased first; a
    /// different split point is wrong even when the letters rejoin to the
    /// same word.
    #[must_use]
    pub fn matches_split(&self, candidate: &[impl AsRef<str>]) -> bool {
        if candidate.len() != self.parts.len() {
            return false;
        }
        candidate
            .iter()
            .zip(&self.parts)
            .all(|(field, part)| field.as_ref().trim().to_lowercase() == *part)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
