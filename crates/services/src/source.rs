use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::DataLoadError;

/// Where the raw question record comes from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the raw data record.
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError` if the data cannot be read or is not JSON.
    async fn fetch(&self) -> Result<Value, DataLoadError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Reads the data record from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    async fn fetch(&self) -> Result<Value, DataLoadError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DataLoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches the data record over HTTP(S).
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn fetch(&self) -> Result<Value, DataLoadError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(DataLoadError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Serves a fixed in-memory record.
#[derive(Debug, Clone)]
pub struct StaticSource {
    data: Value,
}

impl StaticSource {
    #[must_use]
    pub fn new(data: Value) -> Self {
        Self { data }
    }
}

#[async_trait]
impl QuestionSource for StaticSource {
    async fn fetch(&self) -> Result<Value, DataLoadError> {
        Ok(self.data.clone())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
