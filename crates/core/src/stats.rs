//! Read-side aggregates over a tracker snapshot. Nothing here is cached; the
//! numbers are derived fresh on every call.

use crate::model::{ExamKind, Topic, Tracker, WeeklySchedule};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    /// Arithmetic mean, rounded to one decimal.
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectProgress {
    pub subject: String,
    pub topics: usize,
    pub filled_slots: usize,
    pub completed_slots: usize,
    pub completion_ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerStats {
    pub subject_count: usize,
    pub topic_count: usize,
    pub filled_slots: usize,
    pub completed_slots: usize,
    /// Completed over filled slots, in percent.
    pub completion_ratio: f64,
    pub exam_count: usize,
    pub exams_by_kind: Vec<(ExamKind, usize)>,
    pub scores: Option<ScoreSummary>,
    pub filled_cells: usize,
    pub total_cells: usize,
    /// Filled over total schedule cells, in percent.
    pub fill_ratio: f64,
    pub subjects: Vec<SubjectProgress>,
}

impl TrackerStats {
    #[must_use]
    pub fn compute(tracker: &Tracker) -> Self {
        let subjects: Vec<SubjectProgress> = tracker
            .curriculum
            .iter()
            .map(|(subject, topics)| subject_progress(subject, topics))
            .collect();

        let filled_slots: usize = subjects.iter().map(|s| s.filled_slots).sum();
        let completed_slots: usize = subjects.iter().map(|s| s.completed_slots).sum();

        let records = tracker.exams.records();
        let exams_by_kind = ExamKind::ALL
            .into_iter()
            .map(|kind| (kind, records.iter().filter(|r| r.kind() == kind).count()))
            .collect();
        let scores = score_summary(records.iter().map(|r| r.score()));

        let filled_cells = tracker.schedule.filled_count();
        let total_cells = WeeklySchedule::total_slots();

        Self {
            subject_count: tracker.curriculum.subject_count(),
            topic_count: tracker.curriculum.topic_count(),
            filled_slots,
            completed_slots,
            completion_ratio: percent(completed_slots, filled_slots),
            exam_count: records.len(),
            exams_by_kind,
            scores,
            filled_cells,
            total_cells,
            fill_ratio: percent(filled_cells, total_cells),
            subjects,
        }
    }

    #[must_use]
    pub fn exams_of(&self, kind: ExamKind) -> usize {
        self.exams_by_kind
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, count)| *count)
    }
}

fn subject_progress(subject: &str, topics: &[Topic]) -> SubjectProgress {
    let filled_slots: usize = topics.iter().map(|t| t.progress().filled_count()).sum();
    let completed_slots: usize = topics.iter().map(|t| t.progress().completed_count()).sum();
    SubjectProgress {
        subject: subject.to_owned(),
        topics: topics.len(),
        filled_slots,
        completed_slots,
        completion_ratio: percent(completed_slots, filled_slots),
    }
}

fn score_summary(scores: impl Iterator<Item = f64>) -> Option<ScoreSummary> {
    let mut count = 0_u32;
    let mut sum = 0.0;
    let mut max = f64::MIN;
    let mut min = f64::MAX;
    for score in scores {
        count += 1;
        sum += score;
        max = max.max(score);
        min = min.min(score);
    }
    (count > 0).then(|| ScoreSummary {
        mean: round1(sum / f64::from(count)),
        max,
        min,
    })
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round1(part as f64 / whole as f64 * 100.0)
}

/// Round half away from zero to one decimal place.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
