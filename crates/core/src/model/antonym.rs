use thiserror::Error;

use crate::model::ids::ItemId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AntonymItemError {
    #[error("clue cannot be empty")]
    EmptyClue,

    #[error("answer cannot be empty")]
    EmptyAnswer,
}

//
// ─── ANTONYM ITEM ──────────────────────────────────────────────────────────────
//

/// An opposite-meaning clue with the word that answers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntonymItem {
    id: ItemId,
    clue: String,
    answer: String,
}

impl AntonymItem {
    /// Creates a new antonym item.
    ///
    /// # Errors
    ///
    /// Returns `AntonymItemError` if the clue or answer is empty or
    /// whitespace-only.
    pub fn new(
        id: ItemId,
        clue: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, AntonymItemError> {
        let clue = clue.into();
        if clue.trim().is_empty() {
            return Err(AntonymItemError::EmptyClue);
        }

        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(AntonymItemError::EmptyAnswer);
        }

        Ok(Self {
            id,
            clue: clue.trim().to_owned(),
            answer: answer.trim().to_owned(),
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn is_correct(&self, candidate: &str) -> bool {
        candidate == self.answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
