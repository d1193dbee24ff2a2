use std::path::PathBuf;
use std::sync::Arc;

use storage::repository::{Storage, StorageError};
use study_core::model::Tracker;

use crate::Clock;
use crate::curriculum_service::CurriculumService;
use crate::exam_service::ExamService;
use crate::program_service::ProgramService;
use crate::resource_service::ResourceService;
use crate::schedule_service::ScheduleService;
use crate::state::TrackerState;
use crate::stats_service::StatsService;

/// Assembles app-facing services around one shared tracker state.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    state: Arc<TrackerState>,
    schedule: Arc<ScheduleService>,
    curriculum: Arc<CurriculumService>,
    exams: Arc<ExamService>,
    resources: Arc<ResourceService>,
    program: Arc<ProgramService>,
    stats: Arc<StatsService>,
}

impl AppServices {
    /// Build services on top of `storage`, loading whatever it holds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the stored tracker must not be used.
    pub async fn new(storage: Storage, clock: Clock) -> Result<Self, StorageError> {
        let state = Arc::new(TrackerState::load(Arc::clone(&storage.tracker)).await?);
        Ok(Self::from_state(state, clock))
    }

    /// Build services backed by a JSON data file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the data file was written by a newer schema.
    pub async fn new_json_file(
        path: impl Into<PathBuf>,
        clock: Clock,
    ) -> Result<Self, StorageError> {
        Self::new(Storage::json_file(path, clock), clock).await
    }

    /// Services over a fresh in-memory tracker.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        let storage = Storage::in_memory();
        let state = Arc::new(TrackerState::new(Tracker::default(), storage.tracker));
        Self::from_state(state, clock)
    }

    fn from_state(state: Arc<TrackerState>, clock: Clock) -> Self {
        Self {
            clock,
            schedule: Arc::new(ScheduleService::new(Arc::clone(&state))),
            curriculum: Arc::new(CurriculumService::new(Arc::clone(&state))),
            exams: Arc::new(ExamService::new(Arc::clone(&state))),
            resources: Arc::new(ResourceService::new(Arc::clone(&state))),
            program: Arc::new(ProgramService::new(Arc::clone(&state))),
            stats: Arc::new(StatsService::new(Arc::clone(&state))),
            state,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Copy of the tracker for rendering a page or report.
    pub async fn snapshot(&self) -> Tracker {
        self.state.snapshot().await
    }

    #[must_use]
    pub fn schedule(&self) -> Arc<ScheduleService> {
        Arc::clone(&self.schedule)
    }

    #[must_use]
    pub fn curriculum(&self) -> Arc<CurriculumService> {
        Arc::clone(&self.curriculum)
    }

    #[must_use]
    pub fn exams(&self) -> Arc<ExamService> {
        Arc::clone(&self.exams)
    }

    #[must_use]
    pub fn resources(&self) -> Arc<ResourceService> {
        Arc::clone(&self.resources)
    }

    #[must_use]
    pub fn program(&self) -> Arc<ProgramService> {
        Arc::clone(&self.program)
    }

    #[must_use]
    pub fn stats(&self) -> Arc<StatsService> {
        Arc::clone(&self.stats)
    }
}
