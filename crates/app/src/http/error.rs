use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use services::TrackerServiceError;
use storage::repository::StorageError;
use thiserror::Error;
use tracing::{error, warn};
use ui::ReportError;

/// Failures that end a request without a redirect.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The form itself was malformed: bad numbers, dates or grid positions.
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Storage(StorageError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl From<TrackerServiceError> for HttpError {
    fn from(err: TrackerServiceError) -> Self {
        match err {
            TrackerServiceError::Invalid(e) => HttpError::BadRequest(e.to_string()),
            TrackerServiceError::Storage(e) => HttpError::Storage(e),
            other => HttpError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(message) => {
                warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            HttpError::Storage(err) => {
                error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The data file could not be written.".to_owned(),
                )
            }
            HttpError::Report(err) => {
                error!(error = %err, "report failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The report could not be generated.".to_owned(),
                )
            }
        };
        (status, Html(error_page(status, &message))).into_response()
    }
}

fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>{status}</title></head>\
         <body><h1>{status}</h1><p>{}</p><p><a href=\"/\">Back to the schedule</a></p></body></html>",
        escape(message)
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::ScheduleError;

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let err = TrackerServiceError::Invalid(study_core::Error::from(
            ScheduleError::UnknownDay("Funday".into()),
        ));
        let response = HttpError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failure_maps_to_server_error() {
        let err = TrackerServiceError::Storage(StorageError::Serialization("bad".into()));
        let response = HttpError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_carries_the_underlying_message() {
        let err = HttpError::from(TrackerServiceError::Invalid(study_core::Error::from(
            ScheduleError::UnknownDay("Funday".into()),
        )));
        assert!(err.to_string().starts_with("bad request: "));
        assert!(err.to_string().contains("Funday"));

        let err = HttpError::from(ReportError::Pdf("no fonts".into()));
        assert!(matches!(err, HttpError::Report(_)));
        assert!(err.to_string().contains("no fonts"));
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn messages_are_escaped() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
