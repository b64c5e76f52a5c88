use rand::Rng;
use rand::seq::index;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::question::{Question, QuestionError, QuestionRecord};

/// Default number of questions asked in one quiz.
pub const QUIZ_COUNT: usize = 5;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// The loaded data record is missing, malformed or empty.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidDataError {
    #[error("data has no `questions` field")]
    MissingQuestions,

    #[error("`questions` is not a list")]
    NotAList,

    #[error("`questions` is empty")]
    Empty,

    #[error("question {index} is malformed: {reason}")]
    Malformed { index: usize, reason: String },

    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("`notes` is malformed: {reason}")]
    MalformedNotes { reason: String },
}

//
// ─── POOL ──────────────────────────────────────────────────────────────────────
//

/// The full, immutable set of questions a quiz samples from.
///
/// A pool is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    /// Build a pool from the raw data record (`{ "questions": [...] }`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidDataError` when `questions` is absent, not a list, empty,
    /// or when any entry fails to parse or validate.
    pub fn load(data: &Value) -> Result<Self, InvalidDataError> {
        let raw = data
            .get("questions")
            .ok_or(InvalidDataError::MissingQuestions)?;
        let items = raw.as_array().ok_or(InvalidDataError::NotAList)?;

        let questions = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let record = QuestionRecord::deserialize(item).map_err(|err| {
                    InvalidDataError::Malformed {
                        index,
                        reason: err.to_string(),
                    }
                })?;
                Question::try_from(record)
                    .map_err(|source| InvalidDataError::InvalidQuestion { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_questions(questions)
    }

    /// Build a pool from already validated questions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDataError::Empty` if `questions` is empty.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, InvalidDataError> {
        if questions.is_empty() {
            return Err(InvalidDataError::Empty);
        }
        Ok(Self { questions })
    }

    /// Replace the pool with freshly loaded data.
    ///
    /// The current questions are kept if `data` is invalid.
    ///
    /// # Errors
    ///
    /// Same as [`QuestionPool::load`].
    pub fn reload(&mut self, data: &Value) -> Result<(), InvalidDataError> {
        *self = Self::load(data)?;
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Pick `n` distinct questions uniformly at random, in random order.
    ///
    /// When the pool holds fewer than `n` questions the whole pool is returned,
    /// shuffled.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Question> {
        let amount = n.min(self.questions.len());
        index::sample(rng, self.questions.len(), amount)
            .into_iter()
            .map(|i| self.questions[i].clone())
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
