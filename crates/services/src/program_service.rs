use std::sync::Arc;

use study_core::model::ProgramInfo;
use tracing::info;

use crate::error::TrackerServiceError;
use crate::notice::Notice;
use crate::state::TrackerState;

/// Student name and program date shown on every page and report.
#[derive(Clone)]
pub struct ProgramService {
    state: Arc<TrackerState>,
}

impl ProgramService {
    #[must_use]
    pub fn new(state: Arc<TrackerState>) -> Self {
        Self { state }
    }

    /// Replace both header fields. Blank values are allowed.
    ///
    /// # Errors
    ///
    /// Returns `TrackerServiceError::Storage` if saving fails.
    pub async fn update(
        &self,
        student_name: &str,
        program_date: &str,
    ) -> Result<Notice, TrackerServiceError> {
        let info = ProgramInfo::new(student_name, program_date);
        self.state
            .commit(|t| {
                t.program = info;
                Ok(())
            })
            .await?;
        info!("program info updated");
        Ok(Notice::success("Program info saved"))
    }
}
