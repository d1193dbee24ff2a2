use std::collections::HashMap;

use axum::extract::{Form, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use services::Notice;
use study_core::model::ExamId;
use tracing::debug;
use ui::report::{self, ReportContext};
use ui::{PageChrome, PdfReport, pages};

use super::AppState;
use super::error::HttpError;
use super::forms::{
    CellForm, DefineSubjectForm, ExamForm, ExamIdForm, PageQuery, ProgramForm, ResourceForm,
    ResourceKeyForm, SlotForm, SubjectForm, TopicForm, parse_slot_sheet,
};

type HttpResult<T = Response> = Result<T, HttpError>;

/// 303 to `path` with the notice in the query string. `subject` keeps the
/// topics and resources pages on the tab that was edited.
fn see_other(path: &str, subject: Option<&str>, notice: &Notice) -> Response {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(subject) = subject.map(str::trim).filter(|s| !s.is_empty()) {
        query.append_pair("subject", subject);
    }
    query.append_pair("notice", &notice.message);
    query.append_pair("level", notice.level.as_str());
    Redirect::to(&format!("{path}?{}", query.finish())).into_response()
}

fn pdf(report: PdfReport) -> Response {
    debug!(filename = %report.filename, bytes = report.bytes.len(), "report rendered");
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", report.filename),
            ),
        ],
        report.bytes,
    )
        .into_response()
}

fn chrome<'a>(state: &'a AppState, notice: Option<&'a Notice>) -> PageChrome<'a> {
    PageChrome {
        title: &state.report_title,
        notice,
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}

// Pages

pub async fn dashboard(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    let tracker = state.services.snapshot().await;
    let notice = query.notice();
    Html(pages::dashboard(&tracker, chrome(&state, notice.as_ref())))
}

pub async fn topics(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    let tracker = state.services.snapshot().await;
    let notice = query.notice();
    Html(pages::topics(
        &tracker,
        query.subject.as_deref(),
        chrome(&state, notice.as_ref()),
    ))
}

pub async fn exams(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    let tracker = state.services.snapshot().await;
    let today = state.services.clock().today();
    let notice = query.notice();
    Html(pages::exams(&tracker, today, chrome(&state, notice.as_ref())))
}

pub async fn resources(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let tracker = state.services.snapshot().await;
    let notice = query.notice();
    Html(pages::resources(
        &tracker,
        query.subject.as_deref(),
        chrome(&state, notice.as_ref()),
    ))
}

pub async fn stats(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    let tracker = state.services.snapshot().await;
    let stats = state.services.stats().compute().await;
    let notice = query.notice();
    Html(pages::stats(
        &stats,
        &tracker.program,
        chrome(&state, notice.as_ref()),
    ))
}

// Dashboard actions

pub async fn update_program(
    State(state): State<AppState>,
    Form(form): Form<ProgramForm>,
) -> HttpResult {
    let notice = state
        .services
        .program()
        .update(&form.student_name, &form.program_date)
        .await?;
    Ok(see_other("/", None, &notice))
}

pub async fn set_cell(State(state): State<AppState>, Form(form): Form<CellForm>) -> HttpResult {
    let (hour, day, cell) = form.into_parts();
    let notice = state.services.schedule().set_cell(&hour, &day, cell).await?;
    Ok(see_other("/", None, &notice))
}

pub async fn define_subject(
    State(state): State<AppState>,
    Form(form): Form<DefineSubjectForm>,
) -> HttpResult {
    let notice = state
        .services
        .curriculum()
        .define_subject(&form.name, &form.topics)
        .await?;
    Ok(see_other("/", None, &notice))
}

// Topic actions

pub async fn add_subject(
    State(state): State<AppState>,
    Form(form): Form<SubjectForm>,
) -> HttpResult {
    let notice = state.services.curriculum().add_subject(&form.subject).await?;
    let target = (!notice.is_warning()).then_some(form.subject.as_str());
    Ok(see_other("/topics", target, &notice))
}

pub async fn add_topic(State(state): State<AppState>, Form(form): Form<TopicForm>) -> HttpResult {
    let notice = state
        .services
        .curriculum()
        .add_topic(&form.subject, &form.topic)
        .await?;
    Ok(see_other("/topics", Some(form.subject.as_str()), &notice))
}

pub async fn delete_topic(
    State(state): State<AppState>,
    Form(form): Form<TopicForm>,
) -> HttpResult {
    let notice = state
        .services
        .curriculum()
        .remove_topic(&form.subject, &form.topic)
        .await?;
    Ok(see_other("/topics", Some(form.subject.as_str()), &notice))
}

pub async fn clear_slot(State(state): State<AppState>, Form(form): Form<SlotForm>) -> HttpResult {
    let notice = state
        .services
        .curriculum()
        .clear_slot(&form.subject, &form.topic, form.slot)
        .await?;
    Ok(see_other("/topics", Some(form.subject.as_str()), &notice))
}

pub async fn save_slots(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> HttpResult {
    let (subject, sheet) = parse_slot_sheet(&fields)?;
    let notice = state.services.curriculum().save_slots(&subject, &sheet).await?;
    Ok(see_other("/topics", Some(subject.as_str()), &notice))
}

// Exam actions

pub async fn add_exam(State(state): State<AppState>, Form(form): Form<ExamForm>) -> HttpResult {
    let notice = state.services.exams().add(form.into()).await?;
    Ok(see_other("/exams", None, &notice))
}

pub async fn delete_exam(
    State(state): State<AppState>,
    Form(form): Form<ExamIdForm>,
) -> HttpResult {
    let notice = state.services.exams().delete(ExamId::new(form.id)).await?;
    Ok(see_other("/exams", None, &notice))
}

// Resource actions

pub async fn upsert_resource(
    State(state): State<AppState>,
    Form(form): Form<ResourceForm>,
) -> HttpResult {
    let subject = form.subject.clone();
    let notice = state.services.resources().upsert(form.into()).await?;
    Ok(see_other("/resources", Some(subject.as_str()), &notice))
}

pub async fn delete_resource(
    State(state): State<AppState>,
    Form(form): Form<ResourceKeyForm>,
) -> HttpResult {
    let notice = state
        .services
        .resources()
        .remove(&form.subject, &form.name)
        .await?;
    Ok(see_other("/resources", Some(form.subject.as_str()), &notice))
}

// Reports

pub async fn schedule_pdf(State(state): State<AppState>) -> HttpResult {
    let tracker = state.services.snapshot().await;
    let ctx = ReportContext {
        title: &state.report_title,
        program: &tracker.program,
        generated_on: state.services.clock().today(),
    };
    Ok(pdf(report::schedule_report(&tracker, ctx)?))
}

pub async fn exams_pdf(State(state): State<AppState>) -> HttpResult {
    let tracker = state.services.snapshot().await;
    let ctx = ReportContext {
        title: &state.report_title,
        program: &tracker.program,
        generated_on: state.services.clock().today(),
    };
    Ok(pdf(report::exam_report(&tracker, ctx)?))
}

pub async fn stats_pdf(State(state): State<AppState>) -> HttpResult {
    let tracker = state.services.snapshot().await;
    let stats = state.services.stats().compute().await;
    let ctx = ReportContext {
        title: &state.report_title,
        program: &tracker.program,
        generated_on: state.services.clock().today(),
    };
    Ok(pdf(report::stats_report(&stats, ctx)?))
}
