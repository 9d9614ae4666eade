use vocab_core::model::SentenceItem;

use super::{ActivityProgress, AnswerOutcome, ItemState};
use crate::error::ActivityError;

//
// ─── SENTENCE ACTIVITY ─────────────────────────────────────────────────────────
//

/// Cursor-tracked sentence-completion game.
///
/// Items are presented in working-set order; the cursor only ever moves
/// forward, one item per correct answer.
#[derive(Debug, Clone)]
pub struct SentenceActivity {
    items: Vec<SentenceItem>,
    cursor: usize,
    state: ItemState,
}

impl SentenceActivity {
    #[must_use]
    pub fn new(items: Vec<SentenceItem>) -> Self {
        Self {
            items,
            cursor: 0,
            state: ItemState::Unanswered,
        }
    }

    // Accessors
    #[must_use]
    pub fn items(&self) -> &[SentenceItem] {
        &self.items
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&SentenceItem> {
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

    /// Checks a chosen word against the current item.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Complete` when every item is done,
    /// `ActivityError::AlreadyAnswered` after a correct answer, and
    /// `ActivityError::UnknownOption` when the candidate is not one of the
    /// two offered words (no state change).
    pub fn submit_option(&mut self, candidate: &str) -> Result<AnswerOutcome, ActivityError> {
        let Some(item) = self.current_item() else {
            return Err(ActivityError::Complete);
        };
        if self.state.is_correct() {
            return Err(ActivityError::AlreadyAnswered);
        }
        if !item.has_option(candidate) {
            return Err(ActivityError::UnknownOption(candidate.to_owned()));
        }

        let correct = item.is_correct_option(candidate);
        if correct {
            self.state = ItemState::Correct;
            Ok(AnswerOutcome::Correct)
        } else {
            self.state = ItemState::Retry;
            Ok(AnswerOutcome::Incorrect)
        }
    }

    /// Moves past the current item once it is answered correctly. Returns
    /// false, changing nothing, otherwise.
    pub fn advance(&mut self) -> bool {
        if !self.state.is_correct() || self.is_complete() {
            return false;
        }
        self.cursor += 1;
        self.state = ItemState::Unanswered;
        true
    }

    /// Rewinds to the first item and forgets all answer state.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.state = ItemState::Unanswered;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
