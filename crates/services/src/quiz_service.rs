use std::fmt;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::OnceCell;

use quiz_core::{QUIZ_COUNT, QuestionPool, QuizSession, StudyNote, parse_notes};

use crate::error::{PoolLoadError, QuizServiceError};
use crate::source::QuestionSource;

/// Everything read from one successful load of the data record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedQuiz {
    pub pool: QuestionPool,
    pub notes: Vec<StudyNote>,
}

/// Presentation-agnostic state of the one-shot pool load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolStatus {
    NotLoaded,
    Ready { questions: usize },
    Failed(PoolLoadError),
}

/// Loads the question pool once and hands out fresh quiz sessions.
///
/// The load outcome is cached, including failures: a failed load needs a
/// new service (i.e. an app restart) to retry.
pub struct QuizService {
    source: Arc<dyn QuestionSource>,
    quiz_count: usize,
    loaded: OnceCell<Result<Arc<LoadedQuiz>, PoolLoadError>>,
}

impl QuizService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            quiz_count: QUIZ_COUNT,
            loaded: OnceCell::new(),
        }
    }

    /// Override how many questions a quiz asks (minimum 1).
    #[must_use]
    pub fn with_quiz_count(mut self, quiz_count: usize) -> Self {
        self.quiz_count = quiz_count.max(1);
        self
    }

    #[must_use]
    pub fn quiz_count(&self) -> usize {
        self.quiz_count
    }

    /// Load the pool from the source, at most once.
    ///
    /// # Errors
    ///
    /// Returns `PoolLoadError` if fetching failed or the data is invalid. The same
    /// error is returned on every later call.
    pub async fn load_pool(&self) -> Result<Arc<LoadedQuiz>, PoolLoadError> {
        self.loaded
            .get_or_init(|| async { self.fetch_and_parse().await })
            .await
            .clone()
    }

    #[must_use]
    pub fn pool_status(&self) -> PoolStatus {
        match self.loaded.get() {
            None => PoolStatus::NotLoaded,
            Some(Ok(loaded)) => PoolStatus::Ready {
                questions: loaded.pool.len(),
            },
            Some(Err(err)) => PoolStatus::Failed(err.clone()),
        }
    }

    /// Reference notes from the loaded data; empty until a successful load.
    #[must_use]
    pub fn notes(&self) -> Vec<StudyNote> {
        match self.loaded.get() {
            Some(Ok(loaded)) => loaded.notes.clone(),
            _ => Vec::new(),
        }
    }

    /// Start a new quiz with a fresh random sample.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::NotReady` before the pool has loaded and
    /// `QuizServiceError::Unavailable` if the load failed.
    pub fn start_quiz(&self) -> Result<QuizSession, QuizServiceError> {
        self.start_quiz_with_rng(&mut rand::rng())
    }

    /// Same as [`QuizService::start_quiz`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// See [`QuizService::start_quiz`].
    pub fn start_quiz_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<QuizSession, QuizServiceError> {
        let loaded = match self.loaded.get() {
            None => return Err(QuizServiceError::NotReady),
            Some(Err(err)) => return Err(QuizServiceError::Unavailable(err.clone())),
            Some(Ok(loaded)) => loaded,
        };

        let sample = loaded.pool.sample(self.quiz_count, rng);
        tracing::info!(
            sampled = sample.len(),
            pool = loaded.pool.len(),
            "starting quiz"
        );
        Ok(QuizSession::start(sample)?)
    }

    async fn fetch_and_parse(&self) -> Result<Arc<LoadedQuiz>, PoolLoadError> {
        let location = self.source.describe();
        tracing::info!(%location, "loading question data");

        let data = self.source.fetch().await.map_err(|err| {
            tracing::warn!(%location, error = %err, "question data load failed");
            PoolLoadError::from(err)
        })?;

        let parsed = QuestionPool::load(&data).and_then(|pool| {
            let notes = parse_notes(&data)?;
            Ok(LoadedQuiz { pool, notes })
        });

        match parsed {
            Ok(loaded) => {
                tracing::info!(
                    questions = loaded.pool.len(),
                    notes = loaded.notes.len(),
                    "question data loaded"
                );
                Ok(Arc::new(loaded))
            }
            Err(err) => {
                tracing::warn!(%location, error = %err, "question data invalid");
                Err(err.into())
            }
        }
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("source", &self.source.describe())
            .field("quiz_count", &self.quiz_count)
            .field("status", &self.pool_status())
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
