mod explanation;
mod quiz;
mod result;
mod start;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use explanation::ExplanationView;
pub use quiz::QuizView;
pub use result::ResultView;
pub use start::StartView;
pub use state::{ViewError, ViewState, view_state_from_resource};
