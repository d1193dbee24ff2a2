use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use study_core::Clock;
use study_core::model::Tracker;
use thiserror::Error;

use crate::json::JsonFileRepository;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("data file uses schema version {found}, newest supported is {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("connection error: {0}")]
    Connection(String),
}

/// Repository contract for the tracker document.
///
/// The whole tracker is loaded and saved as one unit; there is no partial
/// update path.
#[async_trait]
pub trait TrackerRepository: Send + Sync {
    /// Load the stored tracker, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when stored data exists but must not be used,
    /// for instance a document written by a newer version.
    async fn load(&self) -> Result<Option<Tracker>, StorageError>;

    /// Replace the stored tracker.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the tracker cannot be written.
    async fn save(&self, tracker: &Tracker) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    tracker: Arc<Mutex<Option<Tracker>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already populated tracker.
    #[must_use]
    pub fn with_tracker(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(Some(tracker))),
        }
    }
}

#[async_trait]
impl TrackerRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<Tracker>, StorageError> {
        let guard = self
            .tracker
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, tracker: &Tracker) -> Result<(), StorageError> {
        let mut guard = self
            .tracker
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(tracker.clone());
        Ok(())
    }
}

/// Aggregate storage handle passed to the service layer.
#[derive(Clone)]
pub struct Storage {
    pub tracker: Arc<dyn TrackerRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            tracker: Arc::new(InMemoryRepository::new()),
        }
    }

    /// Build a `Storage` backed by a JSON document at `path`.
    ///
    /// Nothing is read until the first `load`; a missing file is not an error.
    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>, clock: Clock) -> Self {
        Self {
            tracker: Arc::new(JsonFileRepository::new(path, clock)),
        }
    }
}
