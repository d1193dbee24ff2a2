use crate::model::{Curriculum, ExamLog, ProgramInfo, ResourceLibrary, WeeklySchedule};

/// The complete application state: everything that is persisted as one
/// document and rendered by the pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Tracker {
    pub program: ProgramInfo,
    pub schedule: WeeklySchedule,
    pub curriculum: Curriculum,
    pub exams: ExamLog,
    pub resources: ResourceLibrary,
}

impl Default for Tracker {
    /// Fresh state with the built-in subjects and nothing else.
    fn default() -> Self {
        Self {
            program: ProgramInfo::default(),
            schedule: WeeklySchedule::new(),
            curriculum: Curriculum::builtin(),
            exams: ExamLog::new(),
            resources: ResourceLibrary::new(),
        }
    }
}
