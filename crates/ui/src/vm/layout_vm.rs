use services::{Notice, NoticeLevel};
use study_core::model::ProgramInfo;

/// Top-level pages, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Topics,
    Exams,
    Resources,
    Stats,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Dashboard,
        NavItem::Topics,
        NavItem::Exams,
        NavItem::Resources,
        NavItem::Stats,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Weekly Schedule",
            NavItem::Topics => "Topic Tracking",
            NavItem::Exams => "Mock Exams",
            NavItem::Resources => "Resources",
            NavItem::Stats => "Statistics",
        }
    }

    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            NavItem::Dashboard => "/",
            NavItem::Topics => "/topics",
            NavItem::Exams => "/exams",
            NavItem::Resources => "/resources",
            NavItem::Stats => "/stats",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub class: &'static str,
    pub message: String,
}

impl From<&Notice> for NoticeVm {
    fn from(notice: &Notice) -> Self {
        let class = match notice.level {
            NoticeLevel::Success => "notice notice--success",
            NoticeLevel::Warning => "notice notice--warning",
        };
        Self {
            class,
            message: notice.message.clone(),
        }
    }
}

/// Chrome shared by every page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutVm {
    pub title: String,
    pub student_line: Option<String>,
    pub active: NavItem,
    pub notice: Option<NoticeVm>,
}

impl LayoutVm {
    #[must_use]
    pub fn new(
        title: &str,
        program: &ProgramInfo,
        active: NavItem,
        notice: Option<&Notice>,
    ) -> Self {
        let student_line = match (
            program.student_name.as_str(),
            program.program_date.as_str(),
        ) {
            ("", "") => None,
            (name, "") => Some(format!("Student: {name}")),
            ("", date) => Some(format!("Date: {date}")),
            (name, date) => Some(format!("Student: {name} | Date: {date}")),
        };
        Self {
            title: title.to_owned(),
            student_line,
            active,
            notice: notice.map(NoticeVm::from),
        }
    }
}
