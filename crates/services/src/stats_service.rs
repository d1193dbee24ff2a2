use std::sync::Arc;

use study_core::stats::TrackerStats;

use crate::state::TrackerState;

/// Read-only aggregates for the statistics page and report.
#[derive(Clone)]
pub struct StatsService {
    state: Arc<TrackerState>,
}

impl StatsService {
    #[must_use]
    pub fn new(state: Arc<TrackerState>) -> Self {
        Self { state }
    }

    pub async fn compute(&self) -> TrackerStats {
        self.state.read(TrackerStats::compute).await
    }
}
