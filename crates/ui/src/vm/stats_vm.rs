use study_core::model::ExamKind;
use study_core::stats::TrackerStats;

use crate::vm::fmt::{format_number, format_percent};
use crate::vm::layout_vm::LayoutVm;

/// One label/value pair, shared by the page and the PDF report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatLineVm {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubjectStatVm {
    pub subject: String,
    pub topics: usize,
    pub slots: String,
    pub ratio: f64,
    pub ratio_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsVm {
    pub layout: LayoutVm,
    pub general: Vec<StatLineVm>,
    pub exams: Vec<StatLineVm>,
    pub subjects: Vec<SubjectStatVm>,
    pub fill_ratio: f64,
}

#[must_use]
pub fn general_lines(stats: &TrackerStats) -> Vec<StatLineVm> {
    vec![
        StatLineVm {
            label: "Subjects",
            value: stats.subject_count.to_string(),
        },
        StatLineVm {
            label: "Topics",
            value: stats.topic_count.to_string(),
        },
        StatLineVm {
            label: "Resources entered",
            value: stats.filled_slots.to_string(),
        },
        StatLineVm {
            label: "Resources completed",
            value: stats.completed_slots.to_string(),
        },
        StatLineVm {
            label: "Completion rate",
            value: format_percent(stats.completion_ratio),
        },
        StatLineVm {
            label: "Mock exams",
            value: stats.exam_count.to_string(),
        },
        StatLineVm {
            label: "Schedule filled",
            value: format!(
                "{} / {} ({})",
                stats.filled_cells,
                stats.total_cells,
                format_percent(stats.fill_ratio)
            ),
        },
    ]
}

/// Empty when no exam has been entered.
#[must_use]
pub fn exam_lines(stats: &TrackerStats) -> Vec<StatLineVm> {
    let Some(scores) = stats.scores else {
        return Vec::new();
    };
    vec![
        StatLineVm {
            label: "TYT exams",
            value: stats.exams_of(ExamKind::Tyt).to_string(),
        },
        StatLineVm {
            label: "AYT exams",
            value: stats.exams_of(ExamKind::Ayt).to_string(),
        },
        StatLineVm {
            label: "Average score",
            value: format_number(scores.mean),
        },
        StatLineVm {
            label: "Highest score",
            value: format_number(scores.max),
        },
        StatLineVm {
            label: "Lowest score",
            value: format_number(scores.min),
        },
    ]
}

#[must_use]
pub fn map_stats(stats: &TrackerStats, layout: LayoutVm) -> StatsVm {
    StatsVm {
        layout,
        general: general_lines(stats),
        exams: exam_lines(stats),
        subjects: stats
            .subjects
            .iter()
            .map(|s| SubjectStatVm {
                subject: s.subject.clone(),
                topics: s.topics,
                slots: format!("{} / {}", s.completed_slots, s.filled_slots),
                ratio: s.completion_ratio,
                ratio_label: format_percent(s.completion_ratio),
            })
            .collect(),
        fill_ratio: stats.fill_ratio,
    }
}
