//! Downloadable PDF versions of the schedule, exam and statistics pages.
//!
//! Reports use the built-in Helvetica faces only, so every string is
//! transliterated to ASCII before it is drawn.

mod exams;
mod schedule;
mod stats;
mod writer;

use chrono::NaiveDate;
use study_core::model::ProgramInfo;
use study_core::text::report_filename;
use thiserror::Error;

pub use exams::exam_report;
pub use schedule::schedule_report;
pub use stats::stats_report;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error("pdf rendering failed: {0}")]
    Pdf(String),
}

impl From<printpdf::Error> for ReportError {
    fn from(err: printpdf::Error) -> Self {
        ReportError::Pdf(err.to_string())
    }
}

/// Header data shared by every report.
#[derive(Clone, Copy, Debug)]
pub struct ReportContext<'a> {
    pub title: &'a str,
    pub program: &'a ProgramInfo,
    pub generated_on: NaiveDate,
}

impl ReportContext<'_> {
    fn subtitle(&self) -> String {
        let mut parts = Vec::new();
        if !self.program.student_name.trim().is_empty() {
            parts.push(format!("Student: {}", self.program.student_name.trim()));
        }
        if !self.program.program_date.trim().is_empty() {
            parts.push(format!("Date: {}", self.program.program_date.trim()));
        }
        parts.push(format!("Generated: {}", self.generated_on.format("%Y-%m-%d")));
        parts.join("  |  ")
    }
}

/// A rendered report ready to be sent as an attachment.
#[derive(Clone, Debug)]
pub struct PdfReport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl PdfReport {
    fn new(program: &ProgramInfo, suffix: &str, bytes: Vec<u8>) -> Self {
        Self {
            filename: report_filename(&program.student_name, suffix),
            bytes,
        }
    }
}
