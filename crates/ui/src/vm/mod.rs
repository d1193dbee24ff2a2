mod exams_vm;
mod fmt;
mod layout_vm;
mod resources_vm;
mod schedule_vm;
mod stats_vm;
mod topics_vm;

pub use exams_vm::{ChartPointVm, ExamChartVm, ExamRowVm, ExamsVm, map_exams};
pub use fmt::{format_number, format_percent, query_href};
pub use layout_vm::{LayoutVm, NavItem, NoticeVm};
pub use resources_vm::{ResourceRowVm, ResourcesVm, map_resources};
pub use schedule_vm::{CellVm, DashboardVm, ScheduleRowVm, SubjectOptionVm, map_dashboard};
pub use stats_vm::{StatLineVm, StatsVm, SubjectStatVm, exam_lines, general_lines, map_stats};
pub use topics_vm::{SlotVm, SubjectTabVm, TopicRowVm, TopicsVm, map_topics};
