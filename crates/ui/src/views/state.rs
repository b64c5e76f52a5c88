use dioxus::prelude::*;
use quiz_core::SessionError;
use services::PoolLoadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// Fetching the question data failed.
    DataLoad,
    /// The question data was empty or malformed.
    InvalidData,
    NotReady,
    NoActiveQuiz,
    /// The presenter asked the session for a transition it does not allow.
    State(SessionError),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::DataLoad => {
                "Could not load the question data. If you opened the app from a local file, \
                 check that the data file exists, then restart the app."
            }
            ViewError::InvalidData => "The question data is empty or malformed.",
            ViewError::NotReady => "Questions are still loading.",
            ViewError::NoActiveQuiz => "No quiz in progress.",
            ViewError::State(_) | ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<PoolLoadError> for ViewError {
    fn from(err: PoolLoadError) -> Self {
        match err {
            PoolLoadError::InvalidData(_) => ViewError::InvalidData,
            PoolLoadError::DataLoad(_) => ViewError::DataLoad,
            _ => ViewError::Unknown,
        }
    }
}

impl From<SessionError> for ViewError {
    fn from(err: SessionError) -> Self {
        ViewError::State(err)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::InvalidDataError;

    use super::*;

    #[test]
    fn pool_errors_map_to_user_facing_kinds() {
        assert_eq!(
            ViewError::from(PoolLoadError::DataLoad("404".into())),
            ViewError::DataLoad
        );
        assert_eq!(
            ViewError::from(PoolLoadError::InvalidData(InvalidDataError::NotAList)),
            ViewError::InvalidData
        );
        assert_eq!(
            ViewError::from(SessionError::NoSelection),
            ViewError::State(SessionError::NoSelection)
        );
    }
}
