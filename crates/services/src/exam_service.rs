use std::sync::Arc;

use study_core::model::{ExamDraft, ExamError, ExamId};
use tracing::info;

use crate::error::TrackerServiceError;
use crate::notice::Notice;
use crate::state::TrackerState;

/// Mock-exam log.
#[derive(Clone)]
pub struct ExamService {
    state: Arc<TrackerState>,
}

impl ExamService {
    #[must_use]
    pub fn new(state: Arc<TrackerState>) -> Self {
        Self { state }
    }

    /// Validate and append an exam attempt.
    ///
    /// Blank fields produce a warning. Text in a numeric field, an unknown
    /// type or a malformed date is an error.
    ///
    /// # Errors
    ///
    /// Returns `TrackerServiceError::Invalid` for malformed input and
    /// `TrackerServiceError::Storage` if saving fails.
    pub async fn add(&self, draft: ExamDraft) -> Result<Notice, TrackerServiceError> {
        self.state
            .commit(|t| {
                let record = t.exams.append(draft)?;
                Ok((record.id(), record.name().to_owned()))
            })
            .await
            .map(|(id, name)| {
                info!(%id, name = %name, "exam added");
                Notice::success(format!("Exam '{name}' added"))
            })
            .or_else(TrackerServiceError::into_notice)
    }

    /// # Errors
    ///
    /// Returns `TrackerServiceError::Storage` if saving fails. An unknown id
    /// is reported as a warning.
    pub async fn delete(&self, id: ExamId) -> Result<Notice, TrackerServiceError> {
        self.state
            .commit(|t| t.exams.remove(id).ok_or(ExamError::NotFound(id).into()))
            .await
            .map(|removed| {
                info!(%id, "exam deleted");
                Notice::success(format!("Exam '{}' deleted", removed.name()))
            })
            .or_else(TrackerServiceError::into_notice)
    }
}
