use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::ExamId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("unknown exam type: {0}")]
    UnknownKind(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("no exam with id {0}")]
    NotFound(ExamId),
}

impl ExamError {
    /// Missing input is a user slip; the rest means the request itself is
    /// malformed.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        matches!(self, ExamError::MissingField(_))
    }
}

//
// ─── KIND ──────────────────────────────────────────────────────────────────────
//

/// Mock-exam session type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamKind {
    #[serde(rename = "TYT")]
    Tyt,
    #[serde(rename = "AYT")]
    Ayt,
}

impl ExamKind {
    pub const ALL: [ExamKind; 2] = [ExamKind::Tyt, ExamKind::Ayt];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ExamKind::Tyt => "TYT",
            ExamKind::Ayt => "AYT",
        }
    }
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExamKind {
    type Err = ExamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ExamKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ExamError::UnknownKind(s.to_owned()))
    }
}

//
// ─── RECORD ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct ExamRecord {
    id: ExamId,
    kind: ExamKind,
    name: String,
    date: NaiveDate,
    net: f64,
    score: f64,
}

impl ExamRecord {
    #[must_use]
    pub fn from_persisted(
        id: ExamId,
        kind: ExamKind,
        name: String,
        date: NaiveDate,
        net: f64,
        score: f64,
    ) -> Self {
        Self {
            id,
            kind,
            name,
            date,
            net,
            score,
        }
    }

    #[must_use]
    pub fn id(&self) -> ExamId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ExamKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Net correct answers.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.net
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Raw exam input as entered in the form.
#[derive(Clone, Debug, Default)]
pub struct ExamDraft {
    pub kind: String,
    pub name: String,
    pub date: String,
    pub net: String,
    pub score: String,
}

struct ValidExam {
    kind: ExamKind,
    name: String,
    date: NaiveDate,
    net: f64,
    score: f64,
}

impl ExamDraft {
    fn validate(self) -> Result<ValidExam, ExamError> {
        let kind = required("type", &self.kind)?.parse::<ExamKind>()?;
        let name = required("name", &self.name)?.to_owned();
        let raw_date = required("date", &self.date)?;
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .map_err(|_| ExamError::InvalidDate(raw_date.to_owned()))?;
        let net = parse_number("net", &self.net)?;
        let score = parse_number("score", &self.score)?;
        Ok(ValidExam {
            kind,
            name,
            date,
            net,
            score,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ExamError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ExamError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ExamError> {
    let value = required(field, raw)?;
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ExamError::InvalidNumber {
            field,
            value: value.to_owned(),
        })
}

//
// ─── LOG ───────────────────────────────────────────────────────────────────────
//

/// Ordered list of exam attempts, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamLog {
    records: Vec<ExamRecord>,
    next_id: ExamId,
}

impl Default for ExamLog {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: ExamId::new(1),
        }
    }
}

impl ExamLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from storage. The id counter never falls behind an id already
    /// in use.
    #[must_use]
    pub fn from_persisted(records: Vec<ExamRecord>, next_id: ExamId) -> Self {
        let floor = records
            .iter()
            .map(|r| r.id.next())
            .max()
            .unwrap_or(ExamId::new(1));
        Self {
            records,
            next_id: next_id.max(floor),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[ExamRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn next_id(&self) -> ExamId {
        self.next_id
    }

    /// Validate and append a new attempt.
    ///
    /// # Errors
    ///
    /// Returns `ExamError` if a field is missing or malformed.
    pub fn append(&mut self, draft: ExamDraft) -> Result<&ExamRecord, ExamError> {
        let valid = draft.validate()?;
        let id = self.next_id;
        self.next_id = id.next();
        self.records.push(ExamRecord {
            id,
            kind: valid.kind,
            name: valid.name,
            date: valid.date,
            net: valid.net,
            score: valid.score,
        });
        Ok(&self.records[self.records.len() - 1])
    }

    /// Remove by position. Out-of-range indices leave the log untouched.
    pub fn remove_at(&mut self, index: usize) -> Option<ExamRecord> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }

    pub fn remove(&mut self, id: ExamId) -> Option<ExamRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        self.remove_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, score: &str) -> ExamDraft {
        ExamDraft {
            kind: "TYT".into(),
            name: name.into(),
            date: "2024-03-10".into(),
            net: "61.25".into(),
            score: score.into(),
        }
    }

    fn log_with(n: usize) -> ExamLog {
        let mut log = ExamLog::new();
        for i in 0..n {
            log.append(draft(&format!("Exam {i}"), &format!("{}", 300 + i)))
                .unwrap();
        }
        log
    }

    #[test]
    fn append_parses_fields_and_allocates_ids() {
        let mut log = ExamLog::new();
        let record = log.append(draft("  Trial 1 ", "402.5")).unwrap().clone();
        assert_eq!(record.id(), ExamId::new(1));
        assert_eq!(record.kind(), ExamKind::Tyt);
        assert_eq!(record.name(), "Trial 1");
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert!((record.net() - 61.25).abs() < f64::EPSILON);
        assert!((record.score() - 402.5).abs() < f64::EPSILON);
        assert_eq!(log.next_id(), ExamId::new(2));
    }

    #[test]
    fn blank_fields_are_reported_as_missing() {
        let mut log = ExamLog::new();
        let err = log.append(draft("   ", "300")).unwrap_err();
        assert_eq!(err, ExamError::MissingField("name"));
        assert!(err.is_missing_field());
        let err = log.append(draft("A", "")).unwrap_err();
        assert_eq!(err, ExamError::MissingField("score"));
        assert!(log.is_empty());
    }

    #[test]
    fn malformed_numbers_and_dates_are_errors() {
        let mut log = ExamLog::new();
        let err = log.append(draft("A", "lots")).unwrap_err();
        assert!(matches!(err, ExamError::InvalidNumber { field: "score", .. }));
        assert!(!err.is_missing_field());
        assert!(log.append(draft("A", "NaN")).is_err());

        let mut bad_date = draft("A", "300");
        bad_date.date = "10/03/2024".into();
        assert!(matches!(
            log.append(bad_date),
            Err(ExamError::InvalidDate(_))
        ));

        let mut bad_kind = draft("A", "300");
        bad_kind.kind = "YKS".into();
        assert!(matches!(log.append(bad_kind), Err(ExamError::UnknownKind(_))));
        assert!(log.is_empty());
    }

    #[test]
    fn remove_at_splices_the_list() {
        let mut log = log_with(4);
        let last = log.records()[3].clone();
        let removed = log.remove_at(1).unwrap();
        assert_eq!(removed.name(), "Exam 1");
        assert_eq!(log.len(), 3);
        assert_eq!(log.records()[2], last);
        assert_eq!(log.records()[1].name(), "Exam 2");
    }

    #[test]
    fn remove_at_out_of_range_is_a_no_op() {
        let mut log = log_with(2);
        let before = log.clone();
        assert!(log.remove_at(2).is_none());
        assert!(log.remove_at(usize::MAX).is_none());
        assert_eq!(log, before);
    }

    #[test]
    fn remove_by_id_survives_shifting_positions() {
        let mut log = log_with(3);
        let third = log.records()[2].id();
        log.remove_at(0);
        let removed = log.remove(third).unwrap();
        assert_eq!(removed.name(), "Exam 2");
        assert!(log.remove(third).is_none());
        // ids are not reused after deletion
        let next = log.append(draft("New", "310")).unwrap().id();
        assert_eq!(next, ExamId::new(4));
    }

    #[test]
    fn persisted_counter_never_trails_existing_ids() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let record = ExamRecord::from_persisted(
            ExamId::new(7),
            ExamKind::Ayt,
            "Old".into(),
            date,
            0.0,
            0.0,
        );
        let log = ExamLog::from_persisted(vec![record], ExamId::new(2));
        assert_eq!(log.next_id(), ExamId::new(8));
    }
}
