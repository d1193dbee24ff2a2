use study_core::model::{ExamRecord, Tracker};
use study_core::stats::TrackerStats;

use super::writer::{BLUE, GRAY, Orientation, PageWriter, Weight, clip};
use super::{PdfReport, ReportContext, ReportError};
use crate::vm::{exam_lines, format_number};

const COLUMNS: [(f32, &str); 5] = [
    (0.0, "Type"),
    (16.0, "Name"),
    (96.0, "Date"),
    (126.0, "Net"),
    (150.0, "Score"),
];
const CHART_HEIGHT: f32 = 70.0;

/// Exam table, score summary and a score line chart.
///
/// # Errors
///
/// Returns `ReportError::Pdf` if the document cannot be assembled.
pub fn exam_report(tracker: &Tracker, ctx: ReportContext<'_>) -> Result<PdfReport, ReportError> {
    let mut w = PageWriter::open(&ctx, "Mock Exam Report", Orientation::Portrait)?;
    let records = tracker.exams.records();

    if records.is_empty() {
        w.line("No exams recorded yet.", 10.0, Weight::Regular);
        return Ok(PdfReport::new(ctx.program, "Exam_Report", w.finish()?));
    }

    let header: Vec<(f32, String)> = COLUMNS
        .iter()
        .map(|(x, title)| (*x, (*title).to_owned()))
        .collect();
    w.row(&header, 9.0, Weight::Bold);
    w.rule();
    for record in records {
        w.row(&exam_row(record), 9.0, Weight::Regular);
    }
    w.rule();

    w.gap(4.0);
    w.line("Summary", 11.0, Weight::Bold);
    for line in exam_lines(&TrackerStats::compute(tracker)) {
        w.row(
            &[(0.0, line.label.to_owned()), (50.0, line.value)],
            9.0,
            Weight::Regular,
        );
    }

    w.gap(6.0);
    w.line("Score trend", 11.0, Weight::Bold);
    w.gap(2.0);
    draw_chart(&mut w, records);

    Ok(PdfReport::new(ctx.program, "Exam_Report", w.finish()?))
}

fn exam_row(record: &ExamRecord) -> Vec<(f32, String)> {
    let name_width = COLUMNS[2].0 - COLUMNS[1].0 - 2.0;
    vec![
        (COLUMNS[0].0, record.kind().label().to_owned()),
        (COLUMNS[1].0, clip(record.name(), name_width, 9.0)),
        (COLUMNS[2].0, record.date().format("%Y-%m-%d").to_string()),
        (COLUMNS[3].0, format_number(record.net())),
        (COLUMNS[4].0, format_number(record.score())),
    ]
}

/// Scores in list order, highest at the top of the box.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn draw_chart(w: &mut PageWriter, records: &[ExamRecord]) {
    let top = w.reserve(CHART_HEIGHT + 6.0);
    let left = w.left() + 14.0;
    let right = w.left() + w.inner_width();
    let bottom = top - CHART_HEIGHT;

    w.polyline(&[(left, top), (left, bottom), (right, bottom)], GRAY, 0.4);

    let min = records.iter().map(ExamRecord::score).fold(f64::INFINITY, f64::min);
    let max = records
        .iter()
        .map(ExamRecord::score)
        .fold(f64::NEG_INFINITY, f64::max);
    w.label(w.left(), top - 3.0, &format_number(max), 7.0);
    w.label(w.left(), bottom, &format_number(min), 7.0);

    let inner = CHART_HEIGHT - 8.0;
    let step = if records.len() > 1 {
        (right - left - 8.0) / (records.len() - 1) as f32
    } else {
        0.0
    };
    let points: Vec<(f32, f32)> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let x = if records.len() > 1 {
                left + 4.0 + step * i as f32
            } else {
                (left + right) / 2.0
            };
            let y = if (max - min).abs() < f64::EPSILON {
                bottom + CHART_HEIGHT / 2.0
            } else {
                bottom + 4.0 + ((record.score() - min) / (max - min)) as f32 * inner
            };
            (x, y)
        })
        .collect();

    w.polyline(&points, BLUE, 1.0);
    for &(x, y) in &points {
        w.polyline(&[(x - 1.0, y), (x + 1.0, y)], BLUE, 2.0);
    }
}
