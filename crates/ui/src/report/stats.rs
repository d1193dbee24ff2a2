use study_core::stats::TrackerStats;

use super::writer::{Orientation, PageWriter, Weight, clip};
use super::{PdfReport, ReportContext, ReportError};
use crate::vm::{exam_lines, format_percent, general_lines};

/// Overview numbers, per-subject completion and the exam summary.
///
/// # Errors
///
/// Returns `ReportError::Pdf` if the document cannot be assembled.
pub fn stats_report(
    stats: &TrackerStats,
    ctx: ReportContext<'_>,
) -> Result<PdfReport, ReportError> {
    let mut w = PageWriter::open(&ctx, "Statistics Report", Orientation::Portrait)?;

    w.line("Overview", 11.0, Weight::Bold);
    for line in general_lines(stats) {
        w.row(
            &[(0.0, line.label.to_owned()), (60.0, line.value)],
            9.0,
            Weight::Regular,
        );
    }

    w.gap(5.0);
    w.line("Progress by subject", 11.0, Weight::Bold);
    w.row(
        &[
            (0.0, "Subject".to_owned()),
            (70.0, "Topics".to_owned()),
            (95.0, "Completed".to_owned()),
            (125.0, "Entered".to_owned()),
            (150.0, "Rate".to_owned()),
        ],
        9.0,
        Weight::Bold,
    );
    w.rule();
    for subject in &stats.subjects {
        w.row(
            &[
                (0.0, clip(&subject.subject, 68.0, 9.0)),
                (70.0, subject.topics.to_string()),
                (95.0, subject.completed_slots.to_string()),
                (125.0, subject.filled_slots.to_string()),
                (150.0, format_percent(subject.completion_ratio)),
            ],
            9.0,
            Weight::Regular,
        );
    }

    let exams = exam_lines(stats);
    if !exams.is_empty() {
        w.gap(5.0);
        w.line("Mock exams", 11.0, Weight::Bold);
        for line in exams {
            w.row(
                &[(0.0, line.label.to_owned()), (60.0, line.value)],
                9.0,
                Weight::Regular,
            );
        }
    }

    Ok(PdfReport::new(ctx.program, "Statistics_Report", w.finish()?))
}
