use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least 2 options, got {count}")]
    TooFewOptions { count: usize },

    #[error("answer index {answer} is out of range for {options} options")]
    AnswerOutOfRange { answer: usize, options: usize },
}

//
// ─── WIRE RECORD ───────────────────────────────────────────────────────────────
//

/// One entry of the `questions` array as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub answer: usize,
    pub rationale: String,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
///
/// The correct option index is always a valid index into `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    answer: usize,
    rationale: String,
}

impl Question {
    /// Build a question, checking the option list and answer index.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text is blank, when fewer than two options
    /// are given, or when `answer` does not index into `options`. Option text is
    /// taken as-is.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        answer: usize,
        rationale: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                count: options.len(),
            });
        }
        if answer >= options.len() {
            return Err(QuestionError::AnswerOutOfRange {
                answer,
                options: options.len(),
            });
        }

        Ok(Self {
            text,
            options,
            answer,
            rationale: rationale.into(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Index of the correct option (0-based).
    #[must_use]
    pub fn answer(&self) -> usize {
        self.answer
    }

    #[must_use]
    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        self.answer == index
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.question,
            record.options,
            record.answer,
            record.rationale,
        )
    }
}

impl From<&Question> for QuestionRecord {
    fn from(question: &Question) -> Self {
        Self {
            question: question.text.clone(),
            options: question.options.clone(),
            answer: question.answer,
            rationale: question.rationale.clone(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
