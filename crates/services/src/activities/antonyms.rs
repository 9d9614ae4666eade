use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use vocab_core::model::AntonymItem;

use super::{ActivityProgress, AnswerOutcome, ItemState};
use crate::distractors;
use crate::error::ActivityError;

/// Wrong options offered next to the answer.
const DISTRACTOR_COUNT: usize = 3;

//
// ─── ANTONYM ACTIVITY ──────────────────────────────────────────────────────────
//

/// Cursor-tracked opposites game.
///
/// Each item gets an option bank of its answer plus up to three distractors
/// drawn from the master answer pool. The bank is drawn and shuffled once
/// per item and stays frozen across wrong answers, so a retrying learner
/// sees the same buttons in the same places.
#[derive(Debug, Clone)]
pub struct AntonymActivity {
    items: Vec<AntonymItem>,
    master_answers: Vec<String>,
    cursor: usize,
    state: ItemState,
    options: Vec<String>,
    rng: StdRng,
}

impl AntonymActivity {
    /// Creates the activity over a working set. `master_answers` is the
    /// answer list of the whole master pool, used for distractors.
    #[must_use]
    pub fn new(items: Vec<AntonymItem>, master_answers: Vec<String>, rng: StdRng) -> Self {
        let mut activity = Self {
            items,
            master_answers,
            cursor: 0,
            state: ItemState::Unanswered,
            options: Vec::new(),
            rng,
        };
        activity.rebuild_options();
        activity
    }

    // Accessors
    #[must_use]
    pub fn items(&self) -> &[AntonymItem] {
        &self.items
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&AntonymItem> {
        self.items.get(self.cursor)
    }

    #[must_use]
    pub fn item_state(&self) -> ItemState {
        self.state
    }

    /// The cached option bank for the current item. Always contains the
    /// answer exactly once; empty once the activity is complete.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
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

    /// Checks a chosen word against the current item's answer.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Complete` when every item is done,
    /// `ActivityError::AlreadyAnswered` after a correct answer, and
    /// `ActivityError::UnknownOption` when the candidate is not in the
    /// option bank (no state change).
    pub fn submit_choice(&mut self, candidate: &str) -> Result<AnswerOutcome, ActivityError> {
        let Some(item) = self.current_item() else {
            return Err(ActivityError::Complete);
        };
        if self.state.is_correct() {
            return Err(ActivityError::AlreadyAnswered);
        }
        if !self.options.iter().any(|option| option == candidate) {
            return Err(ActivityError::UnknownOption(candidate.to_owned()));
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

    /// Moves past the current item once it is answered correctly, drawing a
    /// fresh option bank for the next one. Returns false, changing nothing,
    /// otherwise.
    pub fn advance(&mut self) -> bool {
        if !self.state.is_correct() || self.is_complete() {
            return false;
        }
        self.cursor += 1;
        self.state = ItemState::Unanswered;
        self.rebuild_options();
        true
    }

    /// Rewinds to the first item, forgets all answer state and redraws its
    /// option bank.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.state = ItemState::Unanswered;
        self.rebuild_options();
    }

    fn rebuild_options(&mut self) {
        let answer = match self.current_item() {
            None => {
                self.options.clear();
                return;
            }
            Some(item) => item.answer().to_owned(),
        };

        let mut options = distractors::draw(
            &answer,
            &self.master_answers,
            DISTRACTOR_COUNT,
            &mut self.rng,
        );
        options.push(answer);
        options.as_mut_slice().shuffle(&mut self.rng);
        self.options = options;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
