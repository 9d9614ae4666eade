//! Shared error types for the services crate.

use thiserror::Error;

use vocab_core::model::IdentityError;

/// Errors emitted by the activity state machines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActivityError {
    #[error("every item in this activity is already done")]
    Complete,
    #[error("current item is already answered correctly")]
    AlreadyAnswered,
    #[error("answer cannot be blank")]
    BlankAnswer,
    #[error("tile '{0}' is not on offer for the current item")]
    UnknownTile(String),
    #[error("option '{0}' is not on offer for the current item")]
    UnknownOption(String),
    #[error("story must be read before answering its questions")]
    StoryNotRead,
}

/// Errors emitted by the session controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a student name is required before playing")]
    NameRequired,
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Errors emitted by `ExplainerService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExplainError {
    #[error("explanations are not configured")]
    Disabled,
    #[error("explanation service returned an empty response")]
    EmptyResponse,
    #[error("explanation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
