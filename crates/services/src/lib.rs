#![forbid(unsafe_code)]

pub mod activities;
pub mod distractors;
pub mod error;
pub mod explainer;
pub mod sampler;
pub mod session;

pub use vocab_core::Clock;

pub use error::{ActivityError, ExplainError, SessionError};

pub use activities::{
    ActivityProgress, AnswerOutcome, AntonymActivity, Difficulty, ItemState, ReadingActivity,
    SentenceActivity, SyllableActivity, WordBuilderActivity, YesNoActivity,
};
pub use explainer::{ExplainerConfig, ExplainerService};
pub use session::Session;
