use std::sync::Arc;

use study_core::model::{ResourceDraft, ResourceError};
use tracing::info;

use crate::error::TrackerServiceError;
use crate::notice::Notice;
use crate::state::TrackerState;

/// Per-subject study resources.
#[derive(Clone)]
pub struct ResourceService {
    state: Arc<TrackerState>,
}

impl ResourceService {
    #[must_use]
    pub fn new(state: Arc<TrackerState>) -> Self {
        Self { state }
    }

    /// Add a resource, replacing one with the same name in the same subject.
    ///
    /// # Errors
    ///
    /// Returns `TrackerServiceError::Invalid` for an unknown resource type and
    /// `TrackerServiceError::Storage` if saving fails.
    pub async fn upsert(&self, draft: ResourceDraft) -> Result<Notice, TrackerServiceError> {
        self.state
            .commit(|t| {
                let (subject, name, resource) = draft.validate()?;
                let replaced = t.resources.upsert(subject.clone(), name.clone(), resource);
                Ok((subject, name, replaced))
            })
            .await
            .map(|(subject, name, replaced)| {
                info!(subject = %subject, name = %name, replaced, "resource saved");
                if replaced {
                    Notice::success(format!("Resource '{name}' updated"))
                } else {
                    Notice::success(format!("Resource '{name}' added to {subject}"))
                }
            })
            .or_else(TrackerServiceError::into_notice)
    }

    /// # Errors
    ///
    /// Returns `TrackerServiceError::Storage` if saving fails.
    pub async fn remove(&self, subject: &str, name: &str) -> Result<Notice, TrackerServiceError> {
        self.state
            .commit(|t| {
                t.resources.remove(subject, name).ok_or_else(|| {
                    ResourceError::NotFound {
                        subject: subject.to_owned(),
                        name: name.to_owned(),
                    }
                    .into()
                })
            })
            .await
            .map(|_| {
                info!(subject, name, "resource deleted");
                Notice::success(format!("Resource '{name}' deleted"))
            })
            .or_else(TrackerServiceError::into_notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;
    use study_core::model::{ResourceKind, Tracker};

    fn draft(name: &str, kind: &str, link: &str) -> ResourceDraft {
        ResourceDraft {
            subject: "Geometry".into(),
            name: name.into(),
            kind: kind.into(),
            description: String::new(),
            link: link.into(),
        }
    }

    fn service() -> (ResourceService, Arc<TrackerState>) {
        let state = Arc::new(TrackerState::new(
            Tracker::default(),
            Arc::new(InMemoryRepository::new()),
        ));
        (ResourceService::new(Arc::clone(&state)), state)
    }

    #[tokio::test]
    async fn upsert_reports_add_then_update() {
        let (service, state) = service();
        let added = service.upsert(draft("Atlas", "Book", "")).await.unwrap();
        assert_eq!(added.message, "Resource 'Atlas' added to Geometry");
        let updated = service.upsert(draft("Atlas", "App", "")).await.unwrap();
        assert_eq!(updated.message, "Resource 'Atlas' updated");

        let kind = state
            .read(|t| t.resources.get("Geometry", "Atlas").map(|r| r.kind()))
            .await;
        assert_eq!(kind, Some(ResourceKind::App));
    }

    #[tokio::test]
    async fn slips_warn_and_unknown_kind_errors() {
        let (service, state) = service();
        assert!(service.upsert(draft(" ", "Book", "")).await.unwrap().is_warning());
        assert!(
            service
                .upsert(draft("Atlas", "Book", "atlas dot com"))
                .await
                .unwrap()
                .is_warning()
        );
        assert!(service.upsert(draft("Atlas", "Scroll", "")).await.is_err());
        assert!(service.remove("Geometry", "Atlas").await.unwrap().is_warning());
        assert!(state.read(|t| t.resources.is_empty()).await);
    }
}
