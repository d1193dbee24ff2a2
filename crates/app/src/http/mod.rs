//! HTTP surface: one route per page and per form action.

mod error;
mod forms;
mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use services::AppServices;

pub use error::HttpError;

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub services: AppServices,
    pub report_title: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(services: AppServices, report_title: impl Into<Arc<str>>) -> Self {
        Self {
            services,
            report_title: report_title.into(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/healthz", get(handlers::healthz))
        .route("/program-info", post(handlers::update_program))
        .route("/schedule/cell", post(handlers::set_cell))
        .route("/subjects/define", post(handlers::define_subject))
        .route("/schedule.pdf", get(handlers::schedule_pdf))
        .route("/topics", get(handlers::topics))
        .route("/topics/subject", post(handlers::add_subject))
        .route("/topics/topic", post(handlers::add_topic))
        .route("/topics/topic/delete", post(handlers::delete_topic))
        .route("/topics/slot/clear", post(handlers::clear_slot))
        .route("/topics/slots", post(handlers::save_slots))
        .route("/exams", get(handlers::exams).post(handlers::add_exam))
        .route("/exams/delete", post(handlers::delete_exam))
        .route("/exams.pdf", get(handlers::exams_pdf))
        .route("/resources", get(handlers::resources).post(handlers::upsert_resource))
        .route("/resources/delete", post(handlers::delete_resource))
        .route("/stats", get(handlers::stats))
        .route("/stats.pdf", get(handlers::stats_pdf))
        .with_state(state)
}
