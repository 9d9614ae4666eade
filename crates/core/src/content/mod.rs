use std::collections::HashSet;

use thiserror::Error;

use crate::model::{
    AntonymItem, AntonymItemError, ItemId, ReadingError, SentenceItem, SentenceItemError, Story,
    StoryId, SyllableItem, SyllableItemError, WordBuilderItem, WordBuilderItemError, YesNoItem,
    YesNoItemError,
};

mod builtin;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("duplicate item id {id} in the {pool} pool")]
    DuplicateItemId { pool: &'static str, id: ItemId },

    #[error("duplicate story id {id}")]
    DuplicateStoryId { id: StoryId },

    #[error(transparent)]
    Syllable(#[from] SyllableItemError),

    #[error(transparent)]
    WordBuilder(#[from] WordBuilderItemError),

    #[error(transparent)]
    Sentence(#[from] SentenceItemError),

    #[error(transparent)]
    Antonym(#[from] AntonymItemError),

    #[error(transparent)]
    YesNo(#[from] YesNoItemError),

    #[error(transparent)]
    Reading(#[from] ReadingError),
}

//
// ─── CONTENT LIBRARY ───────────────────────────────────────────────────────────
//

/// The immutable master pools every session draws its working sets from.
///
/// Item ids are unique within a pool, not across pools.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLibrary {
    syllables: Vec<SyllableItem>,
    word_builder: Vec<WordBuilderItem>,
    sentences: Vec<SentenceItem>,
    antonyms: Vec<AntonymItem>,
    yes_no: Vec<YesNoItem>,
    stories: Vec<Story>,
}

impl ContentLibrary {
    /// Creates a library from already validated items.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if a pool repeats an item id or two stories
    /// share an id.
    pub fn new(
        syllables: Vec<SyllableItem>,
        word_builder: Vec<WordBuilderItem>,
        sentences: Vec<SentenceItem>,
        antonyms: Vec<AntonymItem>,
        yes_no: Vec<YesNoItem>,
        stories: Vec<Story>,
    ) -> Result<Self, ContentError> {
        check_unique("syllable", syllables.iter().map(SyllableItem::id))?;
        check_unique("word builder", word_builder.iter().map(WordBuilderItem::id))?;
        check_unique("sentence", sentences.iter().map(SentenceItem::id))?;
        check_unique("antonym", antonyms.iter().map(AntonymItem::id))?;
        check_unique("yes/no", yes_no.iter().map(YesNoItem::id))?;

        let mut seen = HashSet::new();
        for story in &stories {
            if !seen.insert(story.id()) {
                return Err(ContentError::DuplicateStoryId { id: story.id() });
            }
        }

        Ok(Self {
            syllables,
            word_builder,
            sentences,
            antonyms,
            yes_no,
            stories,
        })
    }

    /// The pools shipped with the app.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the built-in data fails validation.
    pub fn builtin() -> Result<Self, ContentError> {
        builtin::library()
    }

    // Accessors
    #[must_use]
    pub fn syllables(&self) -> &[SyllableItem] {
        &self.syllables
    }

    #[must_use]
    pub fn word_builder(&self) -> &[WordBuilderItem] {
        &self.word_builder
    }

    #[must_use]
    pub fn sentences(&self) -> &[SentenceItem] {
        &self.sentences
    }

    #[must_use]
    pub fn antonyms(&self) -> &[AntonymItem] {
        &self.antonyms
    }

    #[must_use]
    pub fn yes_no(&self) -> &[YesNoItem] {
        &self.yes_no
    }

    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Every word-builder part across the whole pool, flattened in pool
    /// order. Repeated parts stay repeated; draws from this list weight a
    /// part by how often it appears.
    #[must_use]
    pub fn word_builder_parts(&self) -> Vec<String> {
        self.word_builder
            .iter()
            .flat_map(|item| item.parts().iter().cloned())
            .collect()
    }

    /// Every antonym answer in pool order.
    #[must_use]
    pub fn antonym_answers(&self) -> Vec<String> {
        self.antonyms
            .iter()
            .map(|item| item.answer().to_owned())
            .collect()
    }
}

fn check_unique(
    pool: &'static str,
    ids: impl Iterator<Item = ItemId>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateItemId { pool, id });
        }
    }
    Ok(())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
