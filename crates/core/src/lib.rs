#![forbid(unsafe_code)]

pub mod content;
pub mod error;
pub mod model;
pub mod time;

pub use error::Error;
pub use time::Clock;

pub use content::{ContentError, ContentLibrary};
pub use model::{
    ActivityKind, AntonymItem, ItemId, ReadingQuestion, SentenceItem, Story, StoryId, StudentName,
    SyllableItem, WordBuilderItem, YesNoItem,
};
