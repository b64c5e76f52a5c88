//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::{InvalidDataError, SessionError};

/// Errors emitted while fetching the raw question data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("question data request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Cached outcome of a failed pool load.
///
/// Source errors are flattened to text so the outcome can be shared.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolLoadError {
    #[error("could not load question data: {0}")]
    DataLoad(String),
    #[error(transparent)]
    InvalidData(#[from] InvalidDataError),
}

impl From<DataLoadError> for PoolLoadError {
    fn from(err: DataLoadError) -> Self {
        Self::DataLoad(err.to_string())
    }
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("question data has not been loaded yet")]
    NotReady,
    #[error("quiz unavailable: {0}")]
    Unavailable(PoolLoadError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors emitted while reading `QuizConfig`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid quiz count: {raw}")]
    InvalidQuizCount { raw: String },
    #[error("data location cannot be empty")]
    EmptyLocation,
}
