use std::sync::Arc;

use study_core::model::{Day, HourSlot, ScheduleCell};
use tracing::info;

use crate::error::TrackerServiceError;
use crate::notice::Notice;
use crate::state::TrackerState;

/// Edits to the weekly plan grid.
#[derive(Clone)]
pub struct ScheduleService {
    state: Arc<TrackerState>,
}

impl ScheduleService {
    #[must_use]
    pub fn new(state: Arc<TrackerState>) -> Self {
        Self { state }
    }

    /// Overwrite the cell at (`hour`, `day`). A cell with every field blank
    /// clears it.
    ///
    /// # Errors
    ///
    /// Returns `TrackerServiceError::Invalid` if `hour` or `day` is not on the
    /// grid, or `TrackerServiceError::Storage` if saving fails.
    pub async fn set_cell(
        &self,
        hour: &str,
        day: &str,
        cell: ScheduleCell,
    ) -> Result<Notice, TrackerServiceError> {
        let hour: HourSlot = hour.parse().map_err(study_core::Error::from)?;
        let day: Day = day.parse().map_err(study_core::Error::from)?;
        let cleared = !cell.has_content();

        self.state
            .commit(|t| {
                t.schedule.set_cell(hour, day, cell);
                Ok(())
            })
            .await?;

        info!(hour = %hour.label(), %day, cleared, "schedule cell updated");
        Ok(if cleared {
            Notice::success(format!("{day} {} cleared", hour.label()))
        } else {
            Notice::success(format!("{day} {} saved", hour.label()))
        })
    }
}
