use std::collections::HashSet;

use vocab_core::model::{ItemId, SyllableItem};

use super::{ActivityProgress, AnswerOutcome, ItemState};
use crate::error::ActivityError;

//
// ─── SYLLABLE ACTIVITY ─────────────────────────────────────────────────────────
//

/// Completion-tracked syllable-splitting game.
///
/// The item on display is always the first of the working set whose id is
/// not yet in the completed set, so finished items never come back until the
/// session is reset.
#[derive(Debug, Clone)]
pub struct SyllableActivity {
    items: Vec<SyllableItem>,
    completed: HashSet<ItemId>,
    state: ItemState,
}

impl SyllableActivity {
    #[must_use]
    pub fn new(items: Vec<SyllableItem>) -> Self {
        Self {
            items,
            completed: HashSet::new(),
            state: ItemState::Unanswered,
        }
    }

    // Accessors
    #[must_use]
    pub fn items(&self) -> &[SyllableItem] {
        &self.items
    }

    /// First incomplete item of the working set, if any.
    #[must_use]
    pub fn current_item(&self) -> Option<&SyllableItem> {
        self.items
            .iter()
            .find(|item| !self.completed.contains(&item.id()))
    }

    #[must_use]
    pub fn item_state(&self) -> ItemState {
        self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_item().is_none()
    }

    #[must_use]
    pub fn progress(&self) -> ActivityProgress {
        let total = self.items.len();
        let completed = self.completed.len();
        ActivityProgress {
            total,
            completed,
            remaining: total.saturating_sub(completed),
            is_complete: self.is_complete(),
        }
    }

    /// Checks a split attempt against the current item. Fields are trimmed
    /// and lowercased before comparison.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Complete` when every item is done,
    /// `ActivityError::AlreadyAnswered` after a correct answer that has not
    /// been advanced past, and `ActivityError::BlankAnswer` (before any
    /// state change) when a field is empty or whitespace-only.
    pub fn submit_split(
        &mut self,
        fields: &[impl AsRef<str>],
    ) -> Result<AnswerOutcome, ActivityError> {
        let Some(item) = self.current_item() else {
            return Err(ActivityError::Complete);
        };
        if self.state.is_correct() {
            return Err(ActivityError::AlreadyAnswered);
        }
        if fields.iter().any(|field| field.as_ref().trim().is_empty()) {
            return Err(ActivityError::BlankAnswer);
        }

        let correct = item.matches_split(fields);
        if correct {
            self.state = ItemState::Correct;
            Ok(AnswerOutcome::Correct)
        } else {
            self.state = ItemState::Retry;
            Ok(AnswerOutcome::Incorrect)
        }
    }

    /// Moves past the current item once it is answered correctly. Returns
    /// false, changing nothing, when the item is not correct yet or the
    /// activity is already complete.
    pub fn advance(&mut self) -> bool {
        if !self.state.is_correct() {
            return false;
        }
        let Some(id) = self.current_item().map(SyllableItem::id) else {
            return false;
        };
        self.completed.insert(id);
        self.state = ItemState::Unanswered;
        true
    }

    /// Forgets all completions and answer state, keeping the working set.
    pub fn reset(&mut self) {
        self.completed.clear();
        self.state = ItemState::Unanswered;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
