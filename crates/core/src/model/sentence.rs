use thiserror::Error;

use crate::model::ids::ItemId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SentenceItemError {
    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct option '{correct}' is not one of the offered options")]
    UnknownCorrectOption { correct: String },
}

//
// ─── SENTENCE ITEM ─────────────────────────────────────────────────────────────
//

/// A fill-in-the-blank sentence with exactly two candidate words.
///
/// The sentence renders as `prefix` + chosen word + `suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceItem {
    id: ItemId,
    prefix: String,
    suffix: String,
    options: [String; 2],
    correct_option: String,
}

impl SentenceItem {
    /// Creates a new sentence item.
    ///
    /// # Errors
    ///
    /// Returns `SentenceItemError` if either option is blank or the correct
    /// option is not one of the two offered.
    pub fn new(
        id: ItemId,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        options: [String; 2],
        correct_option: impl Into<String>,
    ) -> Result<Self, SentenceItemError> {
        for (index, option) in options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(SentenceItemError::EmptyOption { index });
            }
        }

        let correct_option = correct_option.into();
        if !options.contains(&correct_option) {
            return Err(SentenceItemError::UnknownCorrectOption {
                correct: correct_option,
            });
        }

        Ok(Self {
            id,
            prefix: prefix.into(),
            suffix: suffix.into(),
            options,
            correct_option,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub fn options(&self) -> &[String; 2] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.correct_option
    }

    /// True when the candidate is one of the two offered words.
    #[must_use]
    pub fn has_option(&self, candidate: &str) -> bool {
        self.options.iter().any(|option| option == candidate)
    }

    #[must_use]
    pub fn is_correct_option(&self, candidate: &str) -> bool {
        candidate == self.correct_option
    }

    /// The full sentence with the chosen word filled in. No space is added
    /// before a suffix that starts with punctuation.
    #[must_use]
    pub fn render(&self, chosen: &str) -> String {
        let mut sentence = format!("{} {chosen}", self.prefix);
        if !self.suffix.starts_with(|c: char| c.is_ascii_punctuation()) {
            sentence.push(' ');
        }
        sentence.push_str(&self.suffix);
        sentence
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
