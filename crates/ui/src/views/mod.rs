mod dashboard;
mod exams;
mod layout;
mod resources;
mod stats;
mod topics;

#[cfg(test)]
mod view_smoke;

pub use dashboard::{DashboardPage, DashboardPageProps};
pub use exams::{ExamsPage, ExamsPageProps};
pub use layout::{Layout, LayoutProps};
pub use resources::{ResourcesPage, ResourcesPageProps};
pub use stats::{StatsPage, StatsPageProps};
pub use topics::{TopicsPage, TopicsPageProps};
