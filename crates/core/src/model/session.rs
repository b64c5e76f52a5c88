use std::fmt;

use thiserror::Error;

use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// An operation was invoked in a state that does not permit it.
///
/// These indicate a presenter bug rather than a user-recoverable condition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot start a quiz without questions")]
    EmptySample,

    #[error("quiz already finished")]
    Finished,

    #[error("no option selected")]
    NoSelection,

    #[error("option {index} is out of range for {len} options")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("current question has not been answered yet")]
    NotLocked,

    #[error("more questions remain; advance instead of finishing")]
    NotTerminal,

    #[error("last question answered; finish instead of advancing")]
    NotAdvanceable,
}

//
// ─── STATE TYPES ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Current question is open; the selection may still change.
    AwaitingSelection,
    /// Current question has been graded; selection is frozen.
    Locked,
    Finished,
}

/// What the presenter should offer after a question has been graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Advance,
    Finish,
}

/// Post-grading rendering hint for an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStyle {
    Correct,
    Incorrect,
    Neutral,
}

impl OptionStyle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionStyle::Correct => "correct",
            OptionStyle::Incorrect => "incorrect",
            OptionStyle::Neutral => "neutral",
        }
    }
}

/// Outcome of grading the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grading {
    pub selected: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub rationale: String,
    pub next: NextStep,
}

/// One graded question, kept for the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedAnswer {
    pub position: usize,
    pub selected: usize,
    pub is_correct: bool,
}

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based number of the current question.
    pub number: usize,
    pub total: usize,
    pub score: usize,
}

/// Final tally once the quiz is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a sample of questions.
///
/// Per question: `AwaitingSelection --select_option--> AwaitingSelection`,
/// `AwaitingSelection --submit_answer--> Locked`, then `Locked --advance-->`
/// the next question or `Locked --finish--> Finished`.
#[derive(Clone)]
pub struct QuizSession {
    sample: Vec<Question>,
    position: usize,
    selected: Option<usize>,
    grading: Option<Grading>,
    score: usize,
    answers: Vec<RecordedAnswer>,
    finished: bool,
}

impl QuizSession {
    /// Start a quiz on question 0 with a zero score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySample` if `sample` is empty.
    pub fn start(sample: Vec<Question>) -> Result<Self, SessionError> {
        if sample.is_empty() {
            return Err(SessionError::EmptySample);
        }
        tracing::debug!(questions = sample.len(), "quiz session started");

        Ok(Self {
            sample,
            position: 0,
            selected: None,
            grading: None,
            score: 0,
            answers: Vec::new(),
            finished: false,
        })
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.finished {
            QuizPhase::Finished
        } else if self.grading.is_some() {
            QuizPhase::Locked
        } else {
            QuizPhase::AwaitingSelection
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.sample.len()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// 0-based index of the current question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.grading.is_some()
    }

    /// Grading of the current question, once it has been submitted.
    #[must_use]
    pub fn grading(&self) -> Option<&Grading> {
        self.grading.as_ref()
    }

    #[must_use]
    pub fn answers(&self) -> &[RecordedAnswer] {
        &self.answers
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            number: (self.position + 1).min(self.total()),
            total: self.total(),
            score: self.score,
        }
    }

    /// The question currently on screen.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` once the quiz is over.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        self.sample.get(self.position).ok_or(SessionError::Finished)
    }

    /// Choose an option for the current question; the last choice wins.
    ///
    /// Ignored once the question is locked.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` after the quiz is over and
    /// `SessionError::OptionOutOfRange` for an index the question does not have.
    pub fn select_option(&mut self, index: usize) -> Result<(), SessionError> {
        let len = self.current_question()?.option_count();
        if self.grading.is_some() {
            tracing::debug!(index, "selection ignored, question already locked");
            return Ok(());
        }
        if index >= len {
            return Err(SessionError::OptionOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Lock in the current selection and grade it.
    ///
    /// Calling again on a locked question returns the stored grading and does
    /// not touch the score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSelection` if nothing is selected and
    /// `SessionError::Finished` after the quiz is over.
    pub fn submit_answer(&mut self) -> Result<&Grading, SessionError> {
        let question = self.current_question()?;
        if self.grading.is_some() {
            tracing::debug!(position = self.position, "duplicate submit ignored");
            return self.grading.as_ref().ok_or(SessionError::NotLocked);
        }
        let selected = self.selected.ok_or(SessionError::NoSelection)?;

        let correct_index = question.answer();
        let is_correct = selected == correct_index;
        let rationale = question.rationale().to_string();
        let next = if self.position + 1 < self.sample.len() {
            NextStep::Advance
        } else {
            NextStep::Finish
        };

        if is_correct {
            self.score += 1;
        }
        self.answers.push(RecordedAnswer {
            position: self.position,
            selected,
            is_correct,
        });
        tracing::debug!(
            position = self.position,
            selected,
            is_correct,
            score = self.score,
            "answer graded"
        );

        Ok(&*self.grading.insert(Grading {
            selected,
            correct_index,
            is_correct,
            rationale,
            next,
        }))
    }

    /// Move to the next question after grading.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLocked` before grading and
    /// `SessionError::NotAdvanceable` when the graded question was the last one.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        match self.grading.as_ref().map(|g| g.next) {
            None => Err(SessionError::NotLocked),
            Some(NextStep::Finish) => Err(SessionError::NotAdvanceable),
            Some(NextStep::Advance) => {
                self.position += 1;
                self.selected = None;
                self.grading = None;
                Ok(())
            }
        }
    }

    /// End the quiz after the last question has been graded.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLocked` before grading and
    /// `SessionError::NotTerminal` while questions remain.
    pub fn finish(&mut self) -> Result<QuizSummary, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        match self.grading.as_ref().map(|g| g.next) {
            None => Err(SessionError::NotLocked),
            Some(NextStep::Advance) => Err(SessionError::NotTerminal),
            Some(NextStep::Finish) => {
                self.finished = true;
                self.position = self.sample.len();
                self.selected = None;
                self.grading = None;
                tracing::debug!(score = self.score, total = self.total(), "quiz finished");
                Ok(self.summary_unchecked())
            }
        }
    }

    /// Final score and total, available once finished.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        self.finished.then(|| self.summary_unchecked())
    }

    /// Rendering hint for option `index` of the current question.
    ///
    /// Everything is neutral until the question is graded.
    #[must_use]
    pub fn option_style(&self, index: usize) -> OptionStyle {
        match &self.grading {
            Some(g) if index == g.correct_index => OptionStyle::Correct,
            Some(g) if index == g.selected => OptionStyle::Incorrect,
            _ => OptionStyle::Neutral,
        }
    }

    fn summary_unchecked(&self) -> QuizSummary {
        QuizSummary {
            score: self.score,
            total: self.total(),
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("sample_len", &self.sample.len())
            .field("position", &self.position)
            .field("selected", &self.selected)
            .field("answered", &self.grading.is_some())
            .field("score", &self.score)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
