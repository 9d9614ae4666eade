use vocab_core::model::{ReadingQuestion, Story};

use super::{ActivityProgress, AnswerOutcome, ItemState};
use crate::error::ActivityError;

//
// ─── READING ACTIVITY ──────────────────────────────────────────────────────────
//

/// Story reading with a per-story comprehension quiz.
///
/// Stories keep their library order and are never sampled down; moving past
/// the last story wraps back to the first. The quiz stays hidden behind an
/// explicit read acknowledgment.
#[derive(Debug, Clone)]
pub struct ReadingActivity {
    stories: Vec<Story>,
    story_cursor: usize,
    story_read: bool,
    question_cursor: usize,
    state: ItemState,
}

impl ReadingActivity {
    #[must_use]
    pub fn new(stories: Vec<Story>) -> Self {
        Self {
            stories,
            story_cursor: 0,
            story_read: false,
            question_cursor: 0,
            state: ItemState::Unanswered,
        }
    }

    // Accessors
    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    #[must_use]
    pub fn story_cursor(&self) -> usize {
        self.story_cursor
    }

    #[must_use]
    pub fn current_story(&self) -> Option<&Story> {
        self.stories.get(self.story_cursor)
    }

    #[must_use]
    pub fn story_read(&self) -> bool {
        self.story_read
    }

    #[must_use]
    pub fn question_cursor(&self) -> usize {
        self.question_cursor
    }

    /// The question on display. None until the story is marked read, and
    /// None again once the quiz is finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&ReadingQuestion> {
        if !self.story_read {
            return None;
        }
        self.current_story()?.questions().get(self.question_cursor)
    }

    #[must_use]
    pub fn item_state(&self) -> ItemState {
        self.state
    }

    /// True once the current story's quiz is finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self.current_story() {
            None => true,
            Some(story) => self.question_cursor >= story.question_count(),
        }
    }

    /// Progress through the current story's quiz.
    #[must_use]
    pub fn progress(&self) -> ActivityProgress {
        let total = self
            .current_story()
            .map_or(0, Story::question_count);
        let completed = self.question_cursor.min(total);
        ActivityProgress {
            total,
            completed,
            remaining: total.saturating_sub(completed),
            is_complete: self.is_complete(),
        }
    }

    /// Marks the current story as read, unlocking its quiz.
    pub fn mark_story_read(&mut self) {
        if self.current_story().is_some() {
            self.story_read = true;
        }
    }

    /// Checks a chosen option against the current question.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::StoryNotRead` until the story is marked
    /// read, `ActivityError::Complete` when the quiz is finished,
    /// `ActivityError::AlreadyAnswered` after a correct answer, and
    /// `ActivityError::UnknownOption` when the candidate is not one of the
    /// question's options (no state change).
    pub fn submit_answer(&mut self, candidate: &str) -> Result<AnswerOutcome, ActivityError> {
        if self.current_story().is_none() {
            return Err(ActivityError::Complete);
        }
        if !self.story_read {
            return Err(ActivityError::StoryNotRead);
        }
        let Some(question) = self.current_question() else {
            return Err(ActivityError::Complete);
        };
        if self.state.is_correct() {
            return Err(ActivityError::AlreadyAnswered);
        }
        if !question.has_option(candidate) {
            return Err(ActivityError::UnknownOption(candidate.to_owned()));
        }

        let correct = question.is_correct(candidate);
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
        self.question_cursor += 1;
        self.state = ItemState::Unanswered;
        true
    }

    /// Steps to the next story, wrapping past the last one back to the
    /// first. The new story starts unread with a fresh quiz.
    pub fn next_story(&mut self) {
        if self.stories.is_empty() {
            return;
        }
        self.story_cursor = (self.story_cursor + 1) % self.stories.len();
        self.story_read = false;
        self.question_cursor = 0;
        self.state = ItemState::Unanswered;
    }

    /// Returns to the first story, unread, with all quiz state forgotten.
    pub fn reset(&mut self) {
        self.story_cursor = 0;
        self.story_read = false;
        self.question_cursor = 0;
        self.state = ItemState::Unanswered;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::model::StoryId;

    fn build_story(id: u32, title: &str) -> Story {
        let questions = vec![
            ReadingQuestion::new(
                format!("First question of {title}?"),
                vec!["Right".into(), "Wrong".into()],
                "Right",
            )
            .unwrap(),
            ReadingQuestion::new(
                format!("Second question of {title}?"),
                vec!["Yes".into(), "No".into()],
                "Yes",
            )
            .unwrap(),
        ];
        Story::new(
            StoryId::new(id),
            title,
            vec!["Once upon a time.".into()],
            questions,
        )
        .unwrap()
    }

    fn build_activity() -> ReadingActivity {
        ReadingActivity::new(vec![build_story(1, "Cruise"), build_story(2, "Robot")])
    }

    fn finish_quiz(activity: &mut ReadingActivity) {
        activity.mark_story_read();
        activity.submit_answer("Right").unwrap();
        activity.advance();
        activity.submit_answer("Yes").unwrap();
        activity.advance();
    }

    #[test]
    fn quiz_is_locked_until_the_story_is_read() {
        let mut activity = build_activity();

        assert!(activity.current_question().is_none());
        let err = activity.submit_answer("Right").unwrap_err();
        assert_eq!(err, ActivityError::StoryNotRead);
        assert_eq!(activity.item_state(), ItemState::Unanswered);

        activity.mark_story_read();
        assert!(activity.current_question().is_some());
        assert_eq!(activity.submit_answer("Right").unwrap(), AnswerOutcome::Correct);
    }

    #[test]
    fn wrong_option_is_retryable() {
        let mut activity = build_activity();
        activity.mark_story_read();

        assert_eq!(activity.submit_answer("Wrong").unwrap(), AnswerOutcome::Incorrect);
        assert_eq!(activity.item_state(), ItemState::Retry);
        assert!(!activity.advance());
        assert_eq!(activity.submit_answer("Right").unwrap(), AnswerOutcome::Correct);
    }

    #[test]
    fn candidate_outside_the_options_is_rejected() {
        let mut activity = build_activity();
        activity.mark_story_read();

        let err = activity.submit_answer("Maybe").unwrap_err();
        assert_eq!(err, ActivityError::UnknownOption("Maybe".into()));
    }

    #[test]
    fn finishing_the_quiz_completes_the_story() {
        let mut activity = build_activity();
        finish_quiz(&mut activity);

        assert!(activity.is_complete());
        assert!(activity.current_question().is_none());
        assert_eq!(activity.submit_answer("Right").unwrap_err(), ActivityError::Complete);

        let progress = activity.progress();
        assert_eq!(progress.total, 2);
        assert_eq!(progress.completed, 2);
        assert!(progress.is_complete);
    }

    #[test]
    fn next_story_starts_unread_with_a_fresh_quiz() {
        let mut activity = build_activity();
        finish_quiz(&mut activity);

        activity.next_story();
        assert_eq!(activity.story_cursor(), 1);
        assert_eq!(activity.current_story().unwrap().title(), "Robot");
        assert!(!activity.story_read());
        assert_eq!(activity.question_cursor(), 0);
        assert!(!activity.is_complete());
    }

    #[test]
    fn next_story_wraps_past_the_last_story() {
        let mut activity = build_activity();
        activity.next_story();
        assert_eq!(activity.story_cursor(), 1);

        activity.next_story();
        assert_eq!(activity.story_cursor(), 0);
        assert!(!activity.story_read());
    }

    #[test]
    fn reset_returns_to_the_first_story_unread() {
        let mut activity = build_activity();
        finish_quiz(&mut activity);
        activity.next_story();

        activity.reset();
        assert_eq!(activity.story_cursor(), 0);
        assert!(!activity.story_read());
        assert_eq!(activity.question_cursor(), 0);
    }

    #[test]
    fn no_stories_means_always_complete() {
        let mut activity = ReadingActivity::new(Vec::new());
        assert!(activity.is_complete());
        assert!(activity.current_story().is_none());
        assert_eq!(activity.submit_answer("x").unwrap_err(), ActivityError::Complete);
    }
}
