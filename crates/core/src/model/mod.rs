mod activity;
mod antonym;
mod identity;
mod ids;
mod reading;
mod sentence;
mod syllable;
mod word_builder;
mod yes_no;

pub use ids::{ItemId, StoryId};

pub use activity::ActivityKind;
pub use antonym::{AntonymItem, AntonymItemError};
pub use identity::{IdentityError, StudentName};
pub use reading::{ReadingError, ReadingQuestion, Story};
pub use sentence::{SentenceItem, SentenceItemError};
pub use syllable::{SyllableItem, SyllableItemError};
pub use word_builder::{WordBuilderItem, WordBuilderItemError};
pub use yes_no::{YesNoItem, YesNoItemError};
