//! Per-activity state machines over a session's working sets.

mod antonyms;
mod reading;
mod sentences;
mod syllables;
mod word_builder;
mod yes_no;

pub use antonyms::AntonymActivity;
pub use reading::ReadingActivity;
pub use sentences::SentenceActivity;
pub use syllables::SyllableActivity;
pub use word_builder::{Difficulty, WordBuilderActivity};
pub use yes_no::YesNoActivity;

//
// ─── SHARED ANSWER TYPES ───────────────────────────────────────────────────────
//

/// Verdict on one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// Answer state of the item currently on display.
///
/// A wrong answer moves the item to `Retry`, which accepts further
/// submissions exactly like `Unanswered`. Only `Correct` lets the learner
/// advance, and nothing moves an item back out of `Correct` short of a
/// session reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemState {
    #[default]
    Unanswered,
    Retry,
    Correct,
}

impl ItemState {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, ItemState::Correct)
    }
}

/// Snapshot of one activity's progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityProgress {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_correct_counts_as_correct() {
        assert!(ItemState::Correct.is_correct());
        assert!(!ItemState::Unanswered.is_correct());
        assert!(!ItemState::Retry.is_correct());
    }

    #[test]
    fn outcome_maps_to_bool() {
        assert!(AnswerOutcome::Correct.is_correct());
        assert!(!AnswerOutcome::Incorrect.is_correct());
    }
}
