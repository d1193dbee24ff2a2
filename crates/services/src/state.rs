use std::sync::Arc;

use storage::repository::{StorageError, TrackerRepository};
use study_core::model::Tracker;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::TrackerServiceError;

/// The live tracker plus the repository it is persisted to.
///
/// All mutations go through [`TrackerState::commit`], which holds the lock
/// across validate, mutate, save and swap. Requests are therefore applied one
/// at a time and a failed save leaves the in-memory tracker as it was.
pub struct TrackerState {
    tracker: Mutex<Tracker>,
    repo: Arc<dyn TrackerRepository>,
}

impl TrackerState {
    /// Load the stored tracker, or start from defaults when nothing usable is
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the repository refuses to load.
    pub async fn load(repo: Arc<dyn TrackerRepository>) -> Result<Self, StorageError> {
        let tracker = match repo.load().await? {
            Some(tracker) => tracker,
            None => {
                info!("starting with default tracker");
                Tracker::default()
            }
        };
        Ok(Self::new(tracker, repo))
    }

    #[must_use]
    pub fn new(tracker: Tracker, repo: Arc<dyn TrackerRepository>) -> Self {
        Self {
            tracker: Mutex::new(tracker),
            repo,
        }
    }

    /// Copy of the current tracker for rendering.
    pub async fn snapshot(&self) -> Tracker {
        self.tracker.lock().await.clone()
    }

    pub async fn read<R>(&self, f: impl FnOnce(&Tracker) -> R) -> R {
        let guard = self.tracker.lock().await;
        f(&guard)
    }

    /// Apply `change` to a copy of the tracker, persist the copy, then make
    /// it current.
    ///
    /// # Errors
    ///
    /// Returns `TrackerServiceError::Invalid` if `change` rejects the input
    /// (nothing is saved) and `TrackerServiceError::Storage` if the save
    /// fails (the current tracker is kept).
    pub async fn commit<T>(
        &self,
        change: impl FnOnce(&mut Tracker) -> Result<T, study_core::Error>,
    ) -> Result<T, TrackerServiceError> {
        let mut guard = self.tracker.lock().await;
        let mut draft = guard.clone();
        let value = change(&mut draft)?;
        self.repo.save(&draft).await?;
        *guard = draft;
        debug!("tracker committed");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;
    use study_core::model::{CurriculumError, ProgramInfo};

    #[tokio::test]
    async fn load_falls_back_to_defaults() {
        let state = TrackerState::load(Arc::new(InMemoryRepository::new()))
            .await
            .unwrap();
        assert_eq!(state.snapshot().await, Tracker::default());
    }

    #[tokio::test]
    async fn commit_persists_before_swapping() {
        let repo = InMemoryRepository::new();
        let state = TrackerState::new(Tracker::default(), Arc::new(repo.clone()));
        state
            .commit(|t| {
                t.program = ProgramInfo::new("Ali", "2024");
                Ok(())
            })
            .await
            .unwrap();

        let stored = repo.load().await.unwrap().unwrap();
        assert_eq!(stored.program.student_name, "Ali");
        assert_eq!(state.snapshot().await, stored);
    }

    #[tokio::test]
    async fn rejected_change_saves_nothing() {
        let repo = InMemoryRepository::new();
        let state = TrackerState::new(Tracker::default(), Arc::new(repo.clone()));
        let err = state
            .commit(|t| {
                t.program = ProgramInfo::new("Half applied", "");
                t.curriculum.add_subject("Physics")?;
                Ok(())
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TrackerServiceError::Invalid(study_core::Error::Curriculum(
                CurriculumError::DuplicateSubject(_)
            ))
        ));
        assert!(repo.load().await.unwrap().is_none());
        assert!(state.snapshot().await.program.is_blank());
    }
}
