use quiz_core::{NextStep, QuizPhase, QuizSession, QuizSummary, RecordedAnswer};
use services::{QuizService, QuizServiceError};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    /// The single "next" button: submit, advance or finish depending on phase.
    Primary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    Submit,
    Next,
    SeeResults,
}

impl PrimaryAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PrimaryAction::Submit => "Submit answer",
            PrimaryAction::Next => "Next question",
            PrimaryAction::SeeResults => "See results",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Finished(QuizSummary),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub class: String,
}

/// Render-ready snapshot of the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub counter_label: String,
    pub question_text: String,
    pub options: Vec<OptionVm>,
    pub verdict: Option<&'static str>,
    pub rationale: Option<String>,
    pub primary: PrimaryAction,
    pub primary_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRowVm {
    pub label: String,
    pub verdict: &'static str,
    pub class: &'static str,
}

impl From<&RecordedAnswer> for AnswerRowVm {
    fn from(answer: &RecordedAnswer) -> Self {
        let (verdict, class) = if answer.is_correct {
            ("Correct", "answer-row correct")
        } else {
            ("Incorrect", "answer-row incorrect")
        };
        Self {
            label: format!("Question {}", answer.position + 1),
            verdict,
            class,
        }
    }
}

/// Everything the result screen shows for a finished quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultScreenVm {
    pub score_label: String,
    pub answered_label: String,
    pub rows: Vec<AnswerRowVm>,
}

/// Presenter-side wrapper around the active `QuizSession`.
#[derive(Clone, Debug)]
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        self.session.summary()
    }

    /// Result snapshot; `None` until the quiz is finished.
    #[must_use]
    pub fn result_screen(&self) -> Option<ResultScreenVm> {
        let summary = self.session.summary()?;
        let answers = self.session.answers();
        Some(ResultScreenVm {
            score_label: score_label(summary),
            answered_label: format!("Answered {} of {}", answers.len(), summary.total),
            rows: answers.iter().map(AnswerRowVm::from).collect(),
        })
    }

    #[must_use]
    pub fn primary_action(&self) -> Option<PrimaryAction> {
        match self.session.phase() {
            QuizPhase::AwaitingSelection => Some(PrimaryAction::Submit),
            QuizPhase::Locked => self.session.grading().map(|g| match g.next {
                NextStep::Advance => PrimaryAction::Next,
                NextStep::Finish => PrimaryAction::SeeResults,
            }),
            QuizPhase::Finished => None,
        }
    }

    /// Whether the primary button currently does something.
    #[must_use]
    pub fn primary_enabled(&self) -> bool {
        match self.primary_action() {
            Some(PrimaryAction::Submit) => self.session.selected().is_some(),
            Some(_) => true,
            None => false,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Option<QuizScreenVm> {
        let question = self.session.current_question().ok()?;
        let progress = self.session.progress();
        let grading = self.session.grading();
        let selected = self.session.selected();

        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let mut class = String::from("option");
                if grading.is_some() {
                    class.push(' ');
                    class.push_str(self.session.option_style(index).as_str());
                } else if selected == Some(index) {
                    class.push_str(" selected");
                }
                OptionVm {
                    index,
                    text: text.clone(),
                    class,
                }
            })
            .collect();

        Some(QuizScreenVm {
            counter_label: format!("Question {} of {}", progress.number, progress.total),
            question_text: question.text().to_string(),
            options,
            verdict: grading.map(|g| if g.is_correct { "Correct!" } else { "Incorrect" }),
            rationale: grading.map(|g| g.rationale.clone()),
            primary: self.primary_action().unwrap_or(PrimaryAction::Submit),
            primary_enabled: self.primary_enabled(),
        })
    }

    /// Apply a user intent to the session.
    ///
    /// A primary intent while the button is disabled is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::State` if the session rejects the transition.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizOutcome, ViewError> {
        match intent {
            QuizIntent::Select(index) => {
                self.session.select_option(index)?;
                Ok(QuizOutcome::Continue)
            }
            QuizIntent::Primary => {
                if !self.primary_enabled() {
                    return Ok(QuizOutcome::Continue);
                }
                match self.primary_action() {
                    Some(PrimaryAction::Submit) => {
                        self.session.submit_answer()?;
                        Ok(QuizOutcome::Continue)
                    }
                    Some(PrimaryAction::Next) => {
                        self.session.advance()?;
                        Ok(QuizOutcome::Continue)
                    }
                    Some(PrimaryAction::SeeResults) => {
                        Ok(QuizOutcome::Finished(self.session.finish()?))
                    }
                    None => Ok(QuizOutcome::Continue),
                }
            }
        }
    }
}

/// Start a fresh quiz from the loaded pool.
///
/// # Errors
///
/// Returns `ViewError::NotReady` before the pool loaded, or the load error.
pub fn start_quiz(quiz_service: &QuizService) -> Result<QuizVm, ViewError> {
    match quiz_service.start_quiz() {
        Ok(session) => Ok(QuizVm::new(session)),
        Err(QuizServiceError::NotReady) => Err(ViewError::NotReady),
        Err(QuizServiceError::Unavailable(err)) => Err(err.into()),
        Err(QuizServiceError::Session(err)) => Err(err.into()),
        Err(_) => Err(ViewError::Unknown),
    }
}

#[must_use]
pub fn score_label(summary: QuizSummary) -> String {
    format!("You got {} of {} correct!", summary.score, summary.total)
}
