use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use quiz_core::QUIZ_COUNT;

use crate::error::ConfigError;
use crate::source::{FileSource, HttpSource, QuestionSource};

/// Default data file, looked up relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "quiz_data.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceConfig {
    File(PathBuf),
    Url(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub source: SourceConfig,
    pub quiz_count: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::File(PathBuf::from(DEFAULT_DATA_PATH)),
            quiz_count: QUIZ_COUNT,
        }
    }
}

impl QuizConfig {
    /// Read `QUIZ_DATA_URL`, `QUIZ_DATA_PATH` and `QUIZ_COUNT`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unparsable or zero quiz count, or an empty location.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`QuizConfig::from_env`] with an arbitrary variable lookup.
    ///
    /// A URL wins over a file path when both are set.
    ///
    /// # Errors
    ///
    /// See [`QuizConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup("QUIZ_DATA_URL") {
            config.source = SourceConfig::Url(non_empty(url)?);
        } else if let Some(path) = lookup("QUIZ_DATA_PATH") {
            config.source = SourceConfig::File(PathBuf::from(non_empty(path)?));
        }

        if let Some(raw) = lookup("QUIZ_COUNT") {
            config.quiz_count = parse_quiz_count(&raw)?;
        }

        Ok(config)
    }

    #[must_use]
    pub fn build_source(&self) -> Arc<dyn QuestionSource> {
        match &self.source {
            SourceConfig::File(path) => Arc::new(FileSource::new(path.clone())),
            SourceConfig::Url(url) => Arc::new(HttpSource::new(url.clone())),
        }
    }
}

/// Parse a quiz count; must be a positive integer.
///
/// # Errors
///
/// Returns `ConfigError::InvalidQuizCount` otherwise.
pub fn parse_quiz_count(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ConfigError::InvalidQuizCount {
            raw: raw.to_string(),
        }),
    }
}

fn non_empty(value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyLocation);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_local_file_and_five_questions() {
        let config = QuizConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, QuizConfig::default());
        assert_eq!(
            config.source,
            SourceConfig::File(PathBuf::from("quiz_data.json"))
        );
        assert_eq!(config.quiz_count, 5);
    }

    #[test]
    fn url_takes_precedence_over_path() {
        let config = QuizConfig::from_lookup(lookup(&[
            ("QUIZ_DATA_URL", "https://example.com/quiz.json"),
            ("QUIZ_DATA_PATH", "local.json"),
        ]))
        .unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Url("https://example.com/quiz.json".into())
        );
    }

    #[test]
    fn quiz_count_must_be_positive() {
        let err = QuizConfig::from_lookup(lookup(&[("QUIZ_COUNT", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidQuizCount { raw: "0".into() });

        let config = QuizConfig::from_lookup(lookup(&[("QUIZ_COUNT", " 10 ")])).unwrap();
        assert_eq!(config.quiz_count, 10);
    }

    #[test]
    fn blank_path_is_rejected() {
        let err = QuizConfig::from_lookup(lookup(&[("QUIZ_DATA_PATH", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::EmptyLocation);
    }
}
