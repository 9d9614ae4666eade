use vocab_core::model::YesNoItem;

use super::{ActivityProgress, AnswerOutcome, ItemState};
use crate::error::ActivityError;

//
// ─── YES/NO ACTIVITY ───────────────────────────────────────────────────────────
//

/// Cursor-tracked yes-or-no quiz.
///
/// Works like the sentence game with a boolean answer instead of a chosen
/// word: wrong answers leave the question on display for another try.
#[derive(Debug, Clone)]
pub struct YesNoActivity {
    items: Vec<YesNoItem>,
    cursor: usize,
    state: ItemState,
}

impl YesNoActivity {
    #[must_use]
    pub fn new(items: Vec<YesNoItem>) -> Self {
        Self {
            items,
            cursor: 0,
            state: ItemState::Unanswered,
        }
    }

    // Accessors
    #[must_use]
    pub fn items(&self) -> &[YesNoItem] {
        &self.items
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&YesNoItem> {
        self.items.get(self.cursor)
    }

    #[must_use]
    pub fn item_state(&self) -> ItemState {
        self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.items.len()
    }

    #[must_use]
    pub fn progress(&self) -> ActivityProgress {
        let total = self.items.len();
        let completed = self.cursor.min(total);
        ActivityProgress {
            total,
            completed,
            remaining: total.saturating_sub(completed),
            is_complete: self.is_complete(),
        }
    }

    /// Checks a yes (`true`) or no (`false`) answer against the current
    /// question.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Complete` when every question is done and
    /// `ActivityError::AlreadyAnswered` after a correct answer.
    pub fn submit_answer(&mut self, candidate: bool) -> Result<AnswerOutcome, ActivityError> {
        let Some(item) = self.current_item() else {
            return Err(ActivityError::Complete);
        };
        if self.state.is_correct() {
            return Err(ActivityError::AlreadyAnswered);
        }

        let correct = item.is_correct(candidate);
        if correct {
            self.state = ItemState::Correct;
            Ok(AnswerOutcome::Correct)
        } else {
            self.state = ItemState::Retry;
            Ok(AnswerOutcome::Incorrect)
        }
    }

    /// Moves past the current question once it is answered correctly.
    /// Returns false, changing nothing, otherwise.
    pub fn advance(&mut self) -> bool {
        if !self.state.is_correct() || self.is_complete() {
            return false;
        }
        self.cursor += 1;
        self.state = ItemState::Unanswered;
        true
    }

    /// Rewinds to the first question and forgets all answer state.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.state = ItemState::Unanswered;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
