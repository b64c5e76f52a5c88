use std::sync::Arc;

use dioxus::prelude::*;
use services::QuizService;

use crate::views::ViewError;
use crate::vm::{QuizVm, start_quiz};

pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_service: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_service: app.quiz_service(),
        }
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The single active quiz, shared by the quiz and result screens.
///
/// Starting a quiz replaces it; going back to the start screen clears it.
#[derive(Clone, Copy)]
pub struct ActiveQuiz(pub Signal<Option<QuizVm>>);

impl ActiveQuiz {
    /// Replace any running quiz with `vm`.
    pub fn replace(self, vm: QuizVm) {
        let mut slot = self.0;
        slot.set(Some(vm));
    }

    /// Start a fresh quiz from the loaded pool in place of any running one.
    ///
    /// # Errors
    ///
    /// Returns the `ViewError` from [`start_quiz`]; the running quiz is kept then.
    pub fn restart(self, quiz_service: &QuizService) -> Result<(), ViewError> {
        let vm = start_quiz(quiz_service)?;
        self.replace(vm);
        Ok(())
    }

    /// Abandon the running quiz, if any.
    pub fn clear(self) {
        let mut slot = self.0;
        slot.set(None);
    }
}
