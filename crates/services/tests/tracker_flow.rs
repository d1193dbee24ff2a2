use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use services::{AppServices, Clock, TrackerServiceError};
use storage::repository::{InMemoryRepository, Storage, StorageError, TrackerRepository};
use study_core::model::{ExamDraft, ProgramInfo, ResourceDraft, ScheduleCell, SlotSheet, Tracker};
use study_core::time::fixed_now;

/// Delegates to an in-memory store until told to fail.
#[derive(Default)]
struct FlakyRepository {
    inner: InMemoryRepository,
    failing: AtomicBool,
}

#[async_trait]
impl TrackerRepository for FlakyRepository {
    async fn load(&self) -> Result<Option<Tracker>, StorageError> {
        self.inner.load().await
    }

    async fn save(&self, tracker: &Tracker) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::other("disk full")));
        }
        self.inner.save(tracker).await
    }
}

#[tokio::test]
async fn full_session_is_persisted_and_reloaded() {
    let repo = InMemoryRepository::new();
    let storage = Storage {
        tracker: Arc::new(repo.clone()),
    };
    let clock = Clock::fixed(fixed_now());
    let services = AppServices::new(storage.clone(), clock).await.expect("services");

    services
        .program()
        .update(" Elif Demir ", "2024-2025")
        .await
        .unwrap();
    services
        .schedule()
        .set_cell(
            "20:00",
            "sunday",
            ScheduleCell {
                subject: "Turkish".into(),
                topic: "Grammar".into(),
                ..ScheduleCell::default()
            },
        )
        .await
        .unwrap();
    services
        .curriculum()
        .define_subject("History", "Ottoman Empire\nRepublic Era")
        .await
        .unwrap();
    let mut sheet = SlotSheet::new();
    sheet.set_name(1, 2, "Timeline cards").unwrap();
    sheet.set_completed(1, 2, true).unwrap();
    services
        .curriculum()
        .save_slots("History", &sheet)
        .await
        .unwrap();
    services
        .exams()
        .add(ExamDraft {
            kind: "tyt".into(),
            name: "National mock 3".into(),
            date: "2024-10-12".into(),
            net: "71.5".into(),
            score: "421.75".into(),
        })
        .await
        .unwrap();
    services
        .resources()
        .upsert(ResourceDraft {
            subject: "History".into(),
            name: "Documentary".into(),
            kind: "Video".into(),
            description: String::new(),
            link: "https://video.example/history".into(),
        })
        .await
        .unwrap();

    let live = services.snapshot().await;
    assert_eq!(live.program, ProgramInfo::new("Elif Demir", "2024-2025"));
    assert_eq!(repo.load().await.unwrap().as_ref(), Some(&live));

    let stats = services.stats().compute().await;
    assert_eq!(stats.subject_count, 5);
    assert_eq!(stats.completed_slots, 1);
    assert_eq!(stats.exam_count, 1);
    assert_eq!(stats.filled_cells, 1);

    let reopened = AppServices::new(storage, clock).await.expect("reopen");
    assert_eq!(reopened.snapshot().await, live);
}

#[tokio::test]
async fn services_start_from_the_stored_tracker() {
    let mut stored = Tracker::default();
    stored.program = ProgramInfo::new("Can Arslan", "2025-02-01");
    stored.curriculum.add_subject("Biology").unwrap();
    let storage = Storage {
        tracker: Arc::new(InMemoryRepository::with_tracker(stored.clone())),
    };

    let services = AppServices::new(storage, Clock::fixed(fixed_now()))
        .await
        .expect("services");
    assert_eq!(services.snapshot().await, stored);

    let notice = services.curriculum().add_subject("Biology").await.unwrap();
    assert!(notice.is_warning());
    assert_eq!(services.stats().compute().await.subject_count, 5);
}

#[tokio::test]
async fn failed_save_leaves_state_unchanged() {
    let repo = Arc::new(FlakyRepository::default());
    let storage = Storage {
        tracker: Arc::clone(&repo) as Arc<dyn TrackerRepository>,
    };
    let services = AppServices::new(storage, Clock::fixed(fixed_now()))
        .await
        .expect("services");

    services.curriculum().add_subject("Biology").await.unwrap();
    let before = services.snapshot().await;

    repo.failing.store(true, Ordering::SeqCst);
    let err = services
        .curriculum()
        .add_subject("Chemistry")
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerServiceError::Storage(_)));
    assert_eq!(services.snapshot().await, before);

    repo.failing.store(false, Ordering::SeqCst);
    let notice = services.curriculum().add_subject("Chemistry").await.unwrap();
    assert!(!notice.is_warning());
}

#[tokio::test]
async fn concurrent_edits_are_all_applied() {
    let services = AppServices::in_memory(Clock::fixed(fixed_now()));
    let mut handles = Vec::new();
    for i in 0..16 {
        let exams = services.exams();
        handles.push(tokio::spawn(async move {
            exams
                .add(ExamDraft {
                    kind: "AYT".into(),
                    name: format!("Run {i}"),
                    date: "2024-01-01".into(),
                    net: "10".into(),
                    score: "200".into(),
                })
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let tracker = services.snapshot().await;
    assert_eq!(tracker.exams.len(), 16);
    let mut ids: Vec<u64> = tracker.exams.records().iter().map(|r| r.id().value()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}
