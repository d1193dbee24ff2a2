use chrono::NaiveDate;
use services::Notice;
use study_core::model::{
    Day, ExamDraft, HourSlot, ProgramInfo, ResourceDraft, ScheduleCell, SlotSheet, Tracker,
};
use study_core::stats::TrackerStats;

use crate::pages::{self, PageChrome};

fn tracker() -> Tracker {
    let mut tracker = Tracker::default();
    tracker.program = ProgramInfo::new("Deniz", "2024-2025");
    tracker.schedule.set_cell(
        HourSlot::new(10).unwrap(),
        Day::Wednesday,
        ScheduleCell {
            subject: "Chemistry Lab".into(),
            topic: "Titration".into(),
            exercise_count: "15".into(),
            video: "https://video.example/titration".into(),
            ..ScheduleCell::default()
        },
    );
    tracker
}

fn chrome(notice: Option<&Notice>) -> PageChrome<'_> {
    PageChrome {
        title: "Study Tracker",
        notice,
    }
}

#[test]
fn dashboard_renders_grid_forms_and_notice() {
    let notice = Notice::success("Program info saved");
    let html = pages::dashboard(&tracker(), chrome(Some(&notice)));

    assert!(html.starts_with("<!DOCTYPE html>"), "missing doctype in {html}");
    assert!(html.contains("Student: Deniz | Date: 2024-2025"), "missing header in {html}");
    assert!(html.contains("notice--success"), "missing notice class in {html}");
    assert!(html.contains("Program info saved"), "missing notice in {html}");
    assert!(html.contains("Chemistry Lab"), "missing cell subject in {html}");
    assert!(html.contains("15 questions"), "missing cell count in {html}");
    assert!(html.contains("https://video.example/titration"), "missing video in {html}");
    assert!(html.contains("/schedule.pdf"), "missing download link in {html}");
    assert!(html.contains("action=\"/subjects/define\""), "missing lesson form in {html}");
    assert!(html.contains("menu-link menu-link--active"), "missing active nav in {html}");
}

#[test]
fn topics_page_lists_slots_for_selected_subject() {
    let mut tracker = tracker();
    let mut sheet = SlotSheet::new();
    sheet.set_name(0, 2, "Blue workbook").unwrap();
    sheet.set_completed(0, 2, true).unwrap();
    tracker.curriculum.apply_slot_sheet("Physics", &sheet).unwrap();

    let html = pages::topics(&tracker, Some("Physics"), chrome(None));
    assert!(html.contains("Blue workbook"), "missing slot name in {html}");
    assert!(html.contains("name=\"name_0_2\""), "missing slot input in {html}");
    assert!(html.contains("name=\"done_0_2\""), "missing checkbox in {html}");
    assert!(html.contains("Force"), "missing topic in {html}");
    assert!(html.contains("/topics?subject=Physics"), "missing tab link in {html}");
}

#[test]
fn exams_page_draws_chart_only_with_exams() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let mut tracker = tracker();
    let empty = pages::exams(&tracker, today, chrome(None));
    assert!(!empty.contains("<svg"), "unexpected chart in {empty}");
    assert!(empty.contains("No exams recorded yet."), "missing empty text in {empty}");
    assert!(empty.contains("2024-06-01"), "missing default date in {empty}");

    for (name, score) in [("First", "301.5"), ("Second", "355")] {
        tracker
            .exams
            .append(ExamDraft {
                kind: "TYT".into(),
                name: name.into(),
                date: "2024-05-20".into(),
                net: "55".into(),
                score: score.into(),
            })
            .unwrap();
    }
    let html = pages::exams(&tracker, today, chrome(None));
    assert!(html.contains("<svg"), "missing chart in {html}");
    assert!(html.contains("<circle"), "missing chart points in {html}");
    assert!(html.contains("301.5"), "missing score in {html}");
    assert!(html.contains("action=\"/exams/delete\""), "missing delete form in {html}");
}

#[test]
fn resources_page_shows_links_for_subject() {
    let mut tracker = tracker();
    let (subject, name, resource) = ResourceDraft {
        subject: "Mathematics".into(),
        name: "Problem bank".into(),
        kind: "Book".into(),
        description: "Chapter drills".into(),
        link: "https://books.example/bank".into(),
    }
    .validate()
    .unwrap();
    tracker.resources.upsert(subject, name, resource);

    let html = pages::resources(&tracker, None, chrome(None));
    assert!(html.contains("Problem bank"), "missing resource in {html}");
    assert!(html.contains("https://books.example/bank"), "missing link in {html}");
    assert!(html.contains("1 resources in total."), "missing total in {html}");
}

#[test]
fn stats_page_lists_subject_progress() {
    let tracker = tracker();
    let stats = TrackerStats::compute(&tracker);
    let html = pages::stats(&stats, &tracker.program, chrome(None));
    assert!(html.contains("Progress by subject"), "missing table in {html}");
    assert!(html.contains("Mathematics"), "missing subject in {html}");
    assert!(html.contains("1 / 119"), "missing schedule fill in {html}");
    assert!(html.contains("/stats.pdf"), "missing download link in {html}");
}
