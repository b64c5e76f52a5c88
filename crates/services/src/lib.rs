#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod quiz_service;
pub mod source;

pub use config::{DEFAULT_DATA_PATH, QuizConfig, SourceConfig, parse_quiz_count};
pub use error::{ConfigError, DataLoadError, PoolLoadError, QuizServiceError};
pub use quiz_service::{LoadedQuiz, PoolStatus, QuizService};
pub use source::{FileSource, HttpSource, QuestionSource, StaticSource};
