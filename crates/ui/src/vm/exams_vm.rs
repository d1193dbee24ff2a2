use study_core::model::{ExamKind, Tracker};

use crate::vm::fmt::format_number;
use crate::vm::layout_vm::LayoutVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamRowVm {
    pub id: u64,
    pub kind: &'static str,
    pub name: String,
    pub date: String,
    pub net: String,
    pub score: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartPointVm {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Score line chart in SVG user units.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamChartVm {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub path: String,
    pub points: Vec<ChartPointVm>,
    pub y_min: String,
    pub y_max: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExamsVm {
    pub layout: LayoutVm,
    pub kinds: Vec<&'static str>,
    pub today: String,
    pub rows: Vec<ExamRowVm>,
    pub chart: Option<ExamChartVm>,
}

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 260.0;
const CHART_PADDING: f64 = 28.0;

#[must_use]
pub fn map_exams(tracker: &Tracker, today: chrono::NaiveDate, layout: LayoutVm) -> ExamsVm {
    let records = tracker.exams.records();
    let rows = records
        .iter()
        .map(|r| ExamRowVm {
            id: r.id().value(),
            kind: r.kind().label(),
            name: r.name().to_owned(),
            date: r.date().format("%Y-%m-%d").to_string(),
            net: format_number(r.net()),
            score: format_number(r.score()),
        })
        .collect();

    let series: Vec<(String, f64)> = records
        .iter()
        .map(|r| (format!("{} {}", r.kind(), r.date().format("%Y-%m-%d")), r.score()))
        .collect();

    ExamsVm {
        layout,
        kinds: ExamKind::ALL.into_iter().map(ExamKind::label).collect(),
        today: today.format("%Y-%m-%d").to_string(),
        rows,
        chart: build_chart(&series),
    }
}

/// Points are spaced evenly in list order. A flat series is drawn through
/// the vertical middle.
#[allow(clippy::cast_precision_loss)]
fn build_chart(series: &[(String, f64)]) -> Option<ExamChartVm> {
    if series.is_empty() {
        return None;
    }
    let min = series.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let max = series.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    let inner_w = CHART_WIDTH - 2.0 * CHART_PADDING;
    let inner_h = CHART_HEIGHT - 2.0 * CHART_PADDING;
    let step = if series.len() > 1 {
        inner_w / (series.len() - 1) as f64
    } else {
        0.0
    };

    let points: Vec<ChartPointVm> = series
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let x = if series.len() > 1 {
                CHART_PADDING + step * i as f64
            } else {
                CHART_WIDTH / 2.0
            };
            let y = if (max - min).abs() < f64::EPSILON {
                CHART_HEIGHT / 2.0
            } else {
                CHART_PADDING + (max - value) / (max - min) * inner_h
            };
            ChartPointVm {
                x: round2(x),
                y: round2(y),
                label: format!("{label}: {}", format_number(*value)),
            }
        })
        .collect();

    let path = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}{} {}", if i == 0 { "M" } else { "L" }, p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    Some(ExamChartVm {
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        padding: CHART_PADDING,
        path,
        points,
        y_min: format_number(min),
        y_max: format_number(max),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
