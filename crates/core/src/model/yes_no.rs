use thiserror::Error;

use crate::model::ids::ItemId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum YesNoItemError {
    #[error("question cannot be empty")]
    EmptyQuestion,
}

//
// ─── YES/NO ITEM ───────────────────────────────────────────────────────────────
//

/// A quick comprehension question answered with yes or no.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YesNoItem {
    id: ItemId,
    question: String,
    answer: bool,
}

impl YesNoItem {
    /// Creates a new yes/no item. `answer` is true for yes.
    ///
    /// # Errors
    ///
    /// Returns `YesNoItemError::EmptyQuestion` if the question is empty or
    /// whitespace-only.
    pub fn new(
        id: ItemId,
        question: impl Into<String>,
        answer: bool,
    ) -> Result<Self, YesNoItemError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(YesNoItemError::EmptyQuestion);
        }

        Ok(Self {
            id,
            question: question.trim().to_owned(),
            answer,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> bool {
        self.answer
    }

    #[must_use]
    pub fn is_correct(&self, candidate: bool) -> bool {
        candidate == self.answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
