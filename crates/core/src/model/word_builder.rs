use thiserror::Error;

use crate::model::ids::ItemId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordBuilderItemError {
    #[error("target word cannot be empty")]
    EmptyTarget,

    #[error("target word must have at least one part")]
    NoParts,

    #[error("part {index} of '{target}' is empty")]
    EmptyPart { target: String, index: usize },

    #[error("meaning cannot be empty")]
    EmptyMeaning,

    #[error("parts of '{target}' join to '{joined}'")]
    PartsMismatch { target: String, joined: String },
}

//
// ─── WORD BUILDER ITEM ─────────────────────────────────────────────────────────
//

/// A word the learner assembles from tiles, prompted by its meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBuilderItem {
    id: ItemId,
    parts: Vec<String>,
    meaning: String,
    target_word: String,
}

impl WordBuilderItem {
    /// Creates a new word builder item.
    ///
    /// # Errors
    ///
    /// Returns `WordBuilderItemError` if the target, meaning, or any part is
    /// blank, or if the parts do not concatenate to the target in order.
    pub fn new(
        id: ItemId,
        parts: Vec<String>,
        meaning: impl Into<String>,
        target_word: impl Into<String>,
    ) -> Result<Self, WordBuilderItemError> {
        let target_word = target_word.into();
        if target_word.trim().is_empty() {
            return Err(WordBuilderItemError::EmptyTarget);
        }
        if parts.is_empty() {
            return Err(WordBuilderItemError::NoParts);
        }
        for (index, part) in parts.iter().enumerate() {
            if part.trim().is_empty() {
                return Err(WordBuilderItemError::EmptyPart {
                    target: target_word,
                    index,
                });
            }
        }

        let meaning = meaning.into();
        if meaning.trim().is_empty() {
            return Err(WordBuilderItemError::EmptyMeaning);
        }

        let joined = parts.concat();
        if joined != target_word {
            return Err(WordBuilderItemError::PartsMismatch {
                target: target_word,
                joined,
            });
        }

        Ok(Self {
            id,
            parts,
            meaning: meaning.trim().to_owned(),
            target_word,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    #[must_use]
    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Checks an assembled word against the target. Order matters: the same
    /// tiles in a different order build a different word.
    #[must_use]
    pub fn matches_build(&self, built: &str) -> bool {
        built == self.target_word
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn valuable() -> WordBuilderItem {
        WordBuilderItem::new(
            ItemId::new(1),
            vec!["val".into(), "u".into(), "able".into()],
            "Worth a lot of money",
            "valuable",
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_empty_target() {
        let err =
            WordBuilderItem::new(ItemId::new(1), vec!["a".into()], "meaning", "  ").unwrap_err();
        assert_eq!(err, WordBuilderItemError::EmptyTarget);
    }

    #[test]
    fn new_rejects_empty_meaning() {
        let err =
            WordBuilderItem::new(ItemId::new(1), vec!["usable".into()], " ", "usable").unwrap_err();
        assert_eq!(err, WordBuilderItemError::EmptyMeaning);
    }

    #[test]
    fn new_rejects_parts_that_do_not_build_target() {
        let err = WordBuilderItem::new(
            ItemId::new(1),
            vec!["us".into(), "ible".into()],
            "meaning",
            "usable",
        )
        .unwrap_err();
        assert!(matches!(err, WordBuilderItemError::PartsMismatch { .. }));
    }

    #[test]
    fn matches_the_target_word() {
        let item = valuable();
        assert!(item.matches_build("valuable"));
    }

    #[test]
    fn rejects_tiles_in_wrong_order() {
        // "u" + "val" + "able" concatenates to "uvalable"
        let item = valuable();
        assert!(!item.matches_build("uvalable"));
    }

    #[test]
    fn rejects_partial_build() {
        let item = valuable();
        assert!(!item.matches_build("valu"));
    }
}
