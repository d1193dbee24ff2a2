use std::sync::Arc;

use study_core::model::SlotSheet;
use tracing::info;

use crate::error::TrackerServiceError;
use crate::notice::Notice;
use crate::state::TrackerState;

/// Subjects, topics and the per-topic resource slots.
///
/// Every operation answers with a [`Notice`]; blank, duplicate or unknown
/// names come back as warnings and leave the tracker untouched.
#[derive(Clone)]
pub struct CurriculumService {
    state: Arc<TrackerState>,
}

impl CurriculumService {
    #[must_use]
    pub fn new(state: Arc<TrackerState>) -> Self {
        Self { state }
    }

    /// # Errors
    ///
    /// Returns `TrackerServiceError::Storage` if saving fails.
    pub async fn add_subject(&self, name: &str) -> Result<Notice, TrackerServiceError> {
        self.state
            .commit(|t| Ok(t.curriculum.add_subject(name)?))
            .await
            .map(|added| {
                info!(subject = %added, "subject added");
                Notice::success(format!("Subject '{added}' added"))
            })
            .or_else(TrackerServiceError::into_notice)
    }

    /// Create or replace `name` with the topics listed one per line.
    ///
    /// # Errors
    ///
    /// Returns `TrackerServiceError::Storage` if saving fails.
    pub async fn define_subject(
        &self,
        name: &str,
        topic_lines: &str,
    ) -> Result<Notice, TrackerServiceError> {
        self.state
            .commit(|t| Ok(t.curriculum.define_subject(name, topic_lines.lines())?))
            .await
            .map(|count| {
                info!(subject = name.trim(), topics = count, "subject defined");
                Notice::success(format!("'{}' saved with {count} topics", name.trim()))
            })
            .or_else(TrackerServiceError::into_notice)
    }

    /// # Errors
    ///
    /// Returns `TrackerServiceError::Storage` if saving fails.
    pub async fn add_topic(
        &self,
        subject: &str,
        topic: &str,
    ) -> Result<Notice, TrackerServiceError> {
        self.state
            .commit(|t| Ok(t.curriculum.add_topic(subject, topic)?))
            .await
            .map(|added| {
                info!(subject, topic = %added, "topic added");
                Notice::success(format!("Topic '{added}' added to {subject}"))
            })
            .or_else(TrackerServiceError::into_notice)
    }

    /// Remove a topic and everything tracked for it.
    ///
    /// # Errors
    ///
    /// Returns `TrackerServiceError::Storage` if saving fails.
    pub async fn remove_topic(
        &self,
        subject: &str,
        topic: &str,
    ) -> Result<Notice, TrackerServiceError> {
        self.state
            .commit(|t| Ok(t.curriculum.remove_topic(subject, topic)?))
            .await
            .map(|removed| {
                info!(subject, topic = removed.name(), "topic removed");
                Notice::success(format!("Topic '{}' deleted", removed.name()))
            })
            .or_else(TrackerServiceError::into_notice)
    }

    /// Reset one resource slot to empty and unchecked.
    ///
    /// # Errors
    ///
    /// Returns `TrackerServiceError::Storage` if saving fails.
    pub async fn clear_slot(
        &self,
        subject: &str,
        topic: &str,
        slot: usize,
    ) -> Result<Notice, TrackerServiceError> {
        self.state
            .commit(|t| Ok(t.curriculum.clear_slot(subject, topic, slot)?))
            .await
            .map(|()| Notice::success(format!("Resource {} of '{topic}' cleared", slot + 1)))
            .or_else(TrackerServiceError::into_notice)
    }

    /// Replace the resource slots of every topic in `subject` at once.
    ///
    /// # Errors
    ///
    /// Returns `TrackerServiceError::Storage` if saving fails.
    pub async fn save_slots(
        &self,
        subject: &str,
        sheet: &SlotSheet,
    ) -> Result<Notice, TrackerServiceError> {
        self.state
            .commit(|t| Ok(t.curriculum.apply_slot_sheet(subject, sheet)?))
            .await
            .map(|topics| {
                info!(subject, topics, "resource slots saved");
                Notice::success(format!("Progress for {subject} saved"))
            })
            .or_else(TrackerServiceError::into_notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::{InMemoryRepository, TrackerRepository};
    use study_core::model::Tracker;

    fn service() -> (CurriculumService, Arc<TrackerState>, InMemoryRepository) {
        let repo = InMemoryRepository::new();
        let state = Arc::new(TrackerState::new(Tracker::default(), Arc::new(repo.clone())));
        (CurriculumService::new(Arc::clone(&state)), state, repo)
    }

    #[tokio::test]
    async fn duplicate_subject_warns_and_skips_persistence() {
        let (service, state, repo) = service();
        let notice = service.add_subject("Mathematics").await.unwrap();
        assert!(notice.is_warning());
        assert_eq!(notice.message, "Subject 'Mathematics' already exists");
        assert!(repo.load().await.unwrap().is_none());
        assert_eq!(state.read(|t| t.curriculum.subject_count()).await, 4);
    }

    #[tokio::test]
    async fn define_subject_splits_lines() {
        let (service, state, _) = service();
        let notice = service
            .define_subject("Chemistry", "Atoms\r\n\n  Bonds \nAtoms\n")
            .await
            .unwrap();
        assert_eq!(notice.message, "'Chemistry' saved with 2 topics");
        let names: Vec<String> = state
            .read(|t| {
                t.curriculum
                    .topics("Chemistry")
                    .unwrap_or_default()
                    .iter()
                    .map(|topic| topic.name().to_owned())
                    .collect()
            })
            .await;
        assert_eq!(names, ["Atoms", "Bonds"]);

        let empty = service.define_subject("Biology", " \n ").await.unwrap();
        assert!(empty.is_warning());
    }

    #[tokio::test]
    async fn add_then_delete_topic_drops_its_progress() {
        let (service, state, _) = service();
        service.add_topic("Physics", "Optics").await.unwrap();
        let mut sheet = SlotSheet::new();
        sheet.set_name(3, 0, "Optics workbook").unwrap();
        service.save_slots("Physics", &sheet).await.unwrap();
        let filled = state
            .read(|t| t.curriculum.progress("Physics", "Optics").map(|p| p.filled_count()))
            .await;
        assert_eq!(filled, Some(1));

        service.remove_topic("Physics", "Optics").await.unwrap();
        assert!(
            state
                .read(|t| t.curriculum.progress("Physics", "Optics").is_none())
                .await
        );

        service.add_topic("Physics", "Optics").await.unwrap();
        let filled = state
            .read(|t| t.curriculum.progress("Physics", "Optics").map(|p| p.filled_count()))
            .await;
        assert_eq!(filled, Some(0));
    }

    #[tokio::test]
    async fn unknown_targets_are_warnings() {
        let (service, _, _) = service();
        assert!(service.add_topic("Astronomy", "Stars").await.unwrap().is_warning());
        assert!(service.remove_topic("Physics", "Stars").await.unwrap().is_warning());
        assert!(service.clear_slot("Physics", "Force", 3).await.unwrap().is_warning());
        assert!(
            service
                .save_slots("Astronomy", &SlotSheet::new())
                .await
                .unwrap()
                .is_warning()
        );
    }

    #[tokio::test]
    async fn clear_slot_resets_one_position() {
        let (service, state, _) = service();
        let mut sheet = SlotSheet::new();
        sheet.set_name(0, 0, "Red book").unwrap();
        sheet.set_completed(0, 0, true).unwrap();
        sheet.set_name(0, 1, "Videos").unwrap();
        service.save_slots("Mathematics", &sheet).await.unwrap();

        let notice = service.clear_slot("Mathematics", "Functions", 0).await.unwrap();
        assert_eq!(notice.message, "Resource 1 of 'Functions' cleared");
        let (filled, completed) = state
            .read(|t| {
                let p = t.curriculum.progress("Mathematics", "Functions").unwrap();
                (p.filled_count(), p.completed_count())
            })
            .await;
        assert_eq!((filled, completed), (1, 0));
    }
}
