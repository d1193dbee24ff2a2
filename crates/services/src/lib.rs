#![forbid(unsafe_code)]

pub mod app_services;
pub mod curriculum_service;
pub mod error;
pub mod exam_service;
pub mod notice;
pub mod program_service;
pub mod resource_service;
pub mod schedule_service;
pub mod state;
pub mod stats_service;

pub use study_core::Clock;

pub use app_services::AppServices;
pub use curriculum_service::CurriculumService;
pub use error::TrackerServiceError;
pub use exam_service::ExamService;
pub use notice::{Notice, NoticeLevel};
pub use program_service::ProgramService;
pub use resource_service::ResourceService;
pub use schedule_service::ScheduleService;
pub use state::TrackerState;
pub use stats_service::StatsService;
