use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use study_core::Clock;
use study_core::model::Tracker;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::repository::{StorageError, TrackerRepository};

mod document;
mod migrate;

pub use migrate::CURRENT_SCHEMA_VERSION;

use document::TrackerDocument;

/// Tracker persisted as a single pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
    clock: Clock,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, clock: Clock) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("tracker"), ToOwned::to_owned);
        name.push(suffix);
        self.path.with_file_name(name)
    }

    /// Move an unusable file out of the way so the next save cannot
    /// silently destroy it.
    async fn set_aside(&self, reason: &str) {
        let target = self.sibling(".corrupt");
        match tokio::fs::rename(&self.path, &target).await {
            Ok(()) => warn!(
                path = %self.path.display(),
                moved_to = %target.display(),
                reason,
                "data file unusable, starting from defaults"
            ),
            Err(e) => warn!(
                path = %self.path.display(),
                reason,
                error = %e,
                "data file unusable and could not be moved aside"
            ),
        }
    }
}

#[async_trait]
impl TrackerRepository for JsonFileRepository {
    async fn load(&self) -> Result<Option<Tracker>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no data file yet, using defaults");
                return Ok(None);
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "data file unreadable, using defaults");
                return Ok(None);
            }
        };

        let mut raw: Value = match serde_json::from_slice(&bytes) {
            Ok(raw) => raw,
            Err(e) => {
                self.set_aside(&e.to_string()).await;
                return Ok(None);
            }
        };

        match migrate::run_migrations(&mut raw, self.clock.today()) {
            Ok(()) => {}
            Err(e @ StorageError::UnsupportedVersion { .. }) => return Err(e),
            Err(e) => {
                self.set_aside(&e.to_string()).await;
                return Ok(None);
            }
        }

        match serde_json::from_value::<TrackerDocument>(raw) {
            Ok(document) => {
                debug!(path = %self.path.display(), "loaded tracker document");
                Ok(Some(document.into_tracker()))
            }
            Err(e) => {
                self.set_aside(&e.to_string()).await;
                Ok(None)
            }
        }
    }

    async fn save(&self, tracker: &Tracker) -> Result<(), StorageError> {
        let document = TrackerDocument::from_tracker(tracker);
        let bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp = self.sibling(".tmp");
        let mut file = tokio::fs::File::create(&temp).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);
        tokio::fs::rename(&temp, &self.path).await?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "saved tracker document");
        Ok(())
    }
}
