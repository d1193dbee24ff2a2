//! Shared error types for the services crate.

use thiserror::Error;
use tracing::warn;

use storage::repository::StorageError;

use crate::notice::Notice;

/// Errors emitted by the tracker services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerServiceError {
    #[error(transparent)]
    Invalid(#[from] study_core::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TrackerServiceError {
    /// Turn a recoverable rejection into a warning for the user. Anything
    /// else is handed back unchanged.
    ///
    /// # Errors
    ///
    /// Returns `self` when the failure is not something the user can fix by
    /// editing the form.
    pub fn into_notice(self) -> Result<Notice, Self> {
        match self {
            Self::Invalid(e) if e.is_recoverable() => {
                warn!(error = %e, "input rejected");
                Ok(Notice::warning(e.to_string()))
            }
            other => Err(other),
        }
    }
}
