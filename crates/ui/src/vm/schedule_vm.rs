use study_core::model::{Day, HourSlot, ScheduleCell, Tracker};

use crate::vm::layout_vm::LayoutVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellVm {
    pub subject: String,
    pub lines: Vec<String>,
    pub video: Option<String>,
}

impl From<&ScheduleCell> for CellVm {
    fn from(cell: &ScheduleCell) -> Self {
        let mut lines = Vec::new();
        for value in [&cell.topic, &cell.exercise_type] {
            if !value.trim().is_empty() {
                lines.push(value.trim().to_owned());
            }
        }
        if !cell.exercise_count.trim().is_empty() {
            lines.push(format!("{} questions", cell.exercise_count.trim()));
        }
        if !cell.resource.trim().is_empty() {
            lines.push(format!("Resource: {}", cell.resource.trim()));
        }
        let video = Some(cell.video.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_owned);
        Self {
            subject: cell.subject.trim().to_owned(),
            lines,
            video,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleRowVm {
    pub hour: String,
    pub cells: Vec<Option<CellVm>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectOptionVm {
    pub name: String,
    pub topics: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub layout: LayoutVm,
    pub student_name: String,
    pub program_date: String,
    pub days: Vec<&'static str>,
    pub hours: Vec<String>,
    pub rows: Vec<ScheduleRowVm>,
    pub subjects: Vec<SubjectOptionVm>,
    pub filled: usize,
}

#[must_use]
pub fn map_dashboard(tracker: &Tracker, layout: LayoutVm) -> DashboardVm {
    let rows = HourSlot::all()
        .map(|hour| ScheduleRowVm {
            hour: hour.label(),
            cells: Day::ALL
                .into_iter()
                .map(|day| tracker.schedule.occupied(hour, day).map(CellVm::from))
                .collect(),
        })
        .collect();

    let subjects = tracker
        .curriculum
        .iter()
        .map(|(name, topics)| SubjectOptionVm {
            name: name.to_owned(),
            topics: topics.iter().map(|t| t.name().to_owned()).collect(),
        })
        .collect();

    DashboardVm {
        layout,
        student_name: tracker.program.student_name.clone(),
        program_date: tracker.program.program_date.clone(),
        days: Day::ALL.into_iter().map(Day::label).collect(),
        hours: HourSlot::all().map(HourSlot::label).collect(),
        rows,
        subjects,
        filled: tracker.schedule.filled_count(),
    }
}
