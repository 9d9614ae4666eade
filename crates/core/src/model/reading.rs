use thiserror::Error;

use crate::model::ids::StoryId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReadingError {
    #[error("story title cannot be empty")]
    EmptyTitle,

    #[error("story must have at least one paragraph")]
    NoParagraphs,

    #[error("paragraph {index} is empty")]
    EmptyParagraph { index: usize },

    #[error("story must have at least one question")]
    NoQuestions,

    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("question needs at least two options, found {found}")]
    TooFewOptions { found: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct answer '{answer}' is not one of the offered options")]
    UnknownAnswer { answer: String },
}

//
// ─── READING QUESTION ──────────────────────────────────────────────────────────
//

/// A multiple-choice comprehension question attached to a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingQuestion {
    question: String,
    options: Vec<String>,
    correct_answer: String,
}

impl ReadingQuestion {
    /// Creates a new reading question.
    ///
    /// # Errors
    ///
    /// Returns `ReadingError` if the question is blank, fewer than two
    /// options are offered, any option is blank, or the correct answer is
    /// not one of the options.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, ReadingError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(ReadingError::EmptyQuestion);
        }
        if options.len() < 2 {
            return Err(ReadingError::TooFewOptions {
                found: options.len(),
            });
        }
        for (index, option) in options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(ReadingError::EmptyOption { index });
            }
        }

        let correct_answer = correct_answer.into();
        if !options.contains(&correct_answer) {
            return Err(ReadingError::UnknownAnswer {
                answer: correct_answer,
            });
        }

        Ok(Self {
            question,
            options,
            correct_answer,
        })
    }

    // Accessors
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// True when the candidate is one of the offered options.
    #[must_use]
    pub fn has_option(&self, candidate: &str) -> bool {
        self.options.iter().any(|option| option == candidate)
    }

    #[must_use]
    pub fn is_correct(&self, candidate: &str) -> bool {
        candidate == self.correct_answer
    }
}

//
// ─── STORY ─────────────────────────────────────────────────────────────────────
//

/// A short story followed by its comprehension quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    id: StoryId,
    title: String,
    paragraphs: Vec<String>,
    questions: Vec<ReadingQuestion>,
}

impl Story {
    /// Creates a new story.
    ///
    /// # Errors
    ///
    /// Returns `ReadingError` if the title is blank, there are no paragraphs
    /// or questions, or any paragraph is blank.
    pub fn new(
        id: StoryId,
        title: impl Into<String>,
        paragraphs: Vec<String>,
        questions: Vec<ReadingQuestion>,
    ) -> Result<Self, ReadingError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ReadingError::EmptyTitle);
        }
        if paragraphs.is_empty() {
            return Err(ReadingError::NoParagraphs);
        }
        for (index, paragraph) in paragraphs.iter().enumerate() {
            if paragraph.trim().is_empty() {
                return Err(ReadingError::EmptyParagraph { index });
            }
        }
        if questions.is_empty() {
            return Err(ReadingError::NoQuestions);
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            paragraphs,
            questions,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> StoryId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    #[must_use]
    pub fn questions(&self) -> &[ReadingQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn build_question() -> ReadingQuestion {
        ReadingQuestion::new(
            "What did the family sail on?",
            vec!["A sailboat".into(), "A rowboat".into(), "A ferry".into()],
            "A sailboat",
        )
        .unwrap()
    }

    #[test]
    fn question_rejects_blank_text() {
        let err =
            ReadingQuestion::new("  ", vec!["a".into(), "b".into()], "a").unwrap_err();
        assert_eq!(err, ReadingError::EmptyQuestion);
    }

    #[test]
    fn question_rejects_single_option() {
        let err = ReadingQuestion::new("Why?", vec!["only".into()], "only").unwrap_err();
        assert_eq!(err, ReadingError::TooFewOptions { found: 1 });
    }

    #[test]
    fn question_rejects_answer_outside_options() {
        let err =
            ReadingQuestion::new("Why?", vec!["a".into(), "b".into()], "c").unwrap_err();
        assert!(matches!(err, ReadingError::UnknownAnswer { .. }));
    }

    #[test]
    fn question_recognizes_the_answer() {
        let question = build_question();
        assert!(question.is_correct("A sailboat"));
        assert!(!question.is_correct("A ferry"));
        assert!(question.has_option("A rowboat"));
        assert!(!question.has_option("A canoe"));
    }

    #[test]
    fn story_rejects_empty_title() {
        let err = Story::new(
            StoryId::new(1),
            " ",
            vec!["Once upon a time.".into()],
            vec![build_question()],
        )
        .unwrap_err();
        assert_eq!(err, ReadingError::EmptyTitle);
    }

    #[test]
    fn story_rejects_missing_questions() {
        let err = Story::new(
            StoryId::new(1),
            "A Story",
            vec!["Once upon a time.".into()],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, ReadingError::NoQuestions);
    }

    #[test]
    fn story_happy_path() {
        let story = Story::new(
            StoryId::new(1),
            "A Story",
            vec!["First paragraph.".into(), "Second paragraph.".into()],
            vec![build_question()],
        )
        .unwrap();

        assert_eq!(story.id(), StoryId::new(1));
        assert_eq!(story.title(), "A Story");
        assert_eq!(story.paragraphs().len(), 2);
        assert_eq!(story.question_count(), 1);
    }
}
