use study_core::model::{Day, HourSlot, ScheduleCell, Tracker, WeeklySchedule};

use super::writer::{Orientation, PageWriter, Weight, clip};
use super::{PdfReport, ReportContext, ReportError};

const HOUR_COLUMN: f32 = 16.0;
const CELL_FONT: f32 = 7.0;

/// The weekly grid on one landscape page: one row per hour, one column per
/// day, subject on the first line and the topic details below it.
///
/// # Errors
///
/// Returns `ReportError::Pdf` if the document cannot be assembled.
#[allow(clippy::cast_precision_loss)]
pub fn schedule_report(
    tracker: &Tracker,
    ctx: ReportContext<'_>,
) -> Result<PdfReport, ReportError> {
    let mut w = PageWriter::open(&ctx, "Weekly Schedule", Orientation::Landscape)?;
    let day_width = (w.inner_width() - HOUR_COLUMN) / Day::ALL.len() as f32;
    let offset = |i: usize| HOUR_COLUMN + day_width * i as f32;

    let header: Vec<(f32, String)> = std::iter::once((0.0, "Hour".to_owned()))
        .chain(
            Day::ALL
                .into_iter()
                .enumerate()
                .map(|(i, day)| (offset(i), day.label().to_owned())),
        )
        .collect();
    w.row(&header, 8.0, Weight::Bold);
    w.rule();

    for hour in HourSlot::all() {
        let cells: Vec<Option<&ScheduleCell>> = Day::ALL
            .into_iter()
            .map(|day| tracker.schedule.occupied(hour, day))
            .collect();

        let mut subjects = vec![(0.0, hour.label())];
        let mut details = Vec::new();
        for (i, cell) in cells.iter().enumerate() {
            if let Some(cell) = cell {
                subjects.push((offset(i), clip(&cell.subject, day_width - 1.0, CELL_FONT)));
                details.push((offset(i), clip(&detail(cell), day_width - 1.0, CELL_FONT)));
            }
        }
        w.row(&subjects, CELL_FONT, Weight::Bold);
        w.row(&details, CELL_FONT, Weight::Regular);
        w.rule();
    }

    w.gap(3.0);
    w.line(
        &format!(
            "{} of {} slots planned",
            tracker.schedule.filled_count(),
            WeeklySchedule::total_slots()
        ),
        9.0,
        Weight::Regular,
    );

    Ok(PdfReport::new(ctx.program, "Weekly_Schedule", w.finish()?))
}

fn detail(cell: &ScheduleCell) -> String {
    let mut parts = Vec::new();
    if !cell.topic.trim().is_empty() {
        parts.push(cell.topic.trim().to_owned());
    }
    if !cell.exercise_count.trim().is_empty() {
        parts.push(format!("{}q", cell.exercise_count.trim()));
    }
    parts.join(" ")
}
