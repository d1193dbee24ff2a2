mod curriculum;
mod exam;
mod ids;
mod program;
mod resource;
mod schedule;
mod tracker;

pub use curriculum::{
    Curriculum, CurriculumError, ResourceSlot, SLOTS_PER_TOPIC, SlotSheet, Topic, TopicProgress,
};
pub use exam::{ExamDraft, ExamError, ExamKind, ExamLog, ExamRecord};
pub use ids::ExamId;
pub use program::ProgramInfo;
pub use resource::{Resource, ResourceDraft, ResourceError, ResourceKind, ResourceLibrary};
pub use schedule::{Day, HourSlot, ScheduleCell, ScheduleError, WeeklySchedule};
pub use tracker::Tracker;
