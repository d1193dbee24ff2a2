//! One entry point per page: map the snapshot, render the component, return
//! the HTML document.

use chrono::NaiveDate;
use services::Notice;
use study_core::model::{ProgramInfo, Tracker};
use study_core::stats::TrackerStats;

use crate::render::render_document;
use crate::views::{DashboardPage, DashboardPageProps, ExamsPage, ExamsPageProps};
use crate::views::{ResourcesPage, ResourcesPageProps, StatsPage, StatsPageProps};
use crate::views::{TopicsPage, TopicsPageProps};
use crate::vm::{
    LayoutVm, NavItem, map_dashboard, map_exams, map_resources, map_stats, map_topics,
};

/// What every page needs besides its own data.
#[derive(Clone, Copy, Debug)]
pub struct PageChrome<'a> {
    pub title: &'a str,
    pub notice: Option<&'a Notice>,
}

impl PageChrome<'_> {
    fn layout(&self, program: &ProgramInfo, active: NavItem) -> LayoutVm {
        LayoutVm::new(self.title, program, active, self.notice)
    }
}

#[must_use]
pub fn dashboard(tracker: &Tracker, chrome: PageChrome<'_>) -> String {
    let vm = map_dashboard(tracker, chrome.layout(&tracker.program, NavItem::Dashboard));
    render_document(DashboardPage, DashboardPageProps { vm })
}

#[must_use]
pub fn topics(tracker: &Tracker, subject: Option<&str>, chrome: PageChrome<'_>) -> String {
    let layout = chrome.layout(&tracker.program, NavItem::Topics);
    let vm = map_topics(tracker, subject, layout);
    render_document(TopicsPage, TopicsPageProps { vm })
}

#[must_use]
pub fn exams(tracker: &Tracker, today: NaiveDate, chrome: PageChrome<'_>) -> String {
    let vm = map_exams(tracker, today, chrome.layout(&tracker.program, NavItem::Exams));
    render_document(ExamsPage, ExamsPageProps { vm })
}

#[must_use]
pub fn resources(tracker: &Tracker, subject: Option<&str>, chrome: PageChrome<'_>) -> String {
    let layout = chrome.layout(&tracker.program, NavItem::Resources);
    let vm = map_resources(tracker, subject, layout);
    render_document(ResourcesPage, ResourcesPageProps { vm })
}

#[must_use]
pub fn stats(stats: &TrackerStats, program: &ProgramInfo, chrome: PageChrome<'_>) -> String {
    let vm = map_stats(stats, chrome.layout(program, NavItem::Stats));
    render_document(StatsPage, StatsPageProps { vm })
}
