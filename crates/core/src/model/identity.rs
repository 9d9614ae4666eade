use std::fmt;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdentityError {
    #[error("student name cannot be empty")]
    EmptyName,
}

//
// ─── STUDENT NAME ──────────────────────────────────────────────────────────────
//

/// The name a student signs in with. Display-only, never used as a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentName(String);

impl StudentName {
    /// Creates a student name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::EmptyName` if the input is empty or
    /// whitespace-only.
    pub fn new(input: impl Into<String>) -> Result<Self, IdentityError> {
        let input = input.into();
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
