//! Typed bodies for every POST route. Optional fields default to empty so a
//! form that leaves an input out still deserializes.

use std::collections::HashMap;

use serde::Deserialize;
use services::{Notice, NoticeLevel};
use study_core::model::{ExamDraft, ResourceDraft, ScheduleCell, SlotSheet};

use super::error::HttpError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProgramForm {
    pub student_name: String,
    pub program_date: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CellForm {
    pub hour: String,
    pub day: String,
    pub subject: String,
    pub topic: String,
    pub exercise_type: String,
    pub exercise_count: String,
    pub video: String,
    pub resource: String,
}

impl CellForm {
    pub fn into_parts(self) -> (String, String, ScheduleCell) {
        let cell = ScheduleCell {
            subject: self.subject,
            topic: self.topic,
            exercise_type: self.exercise_type,
            exercise_count: self.exercise_count,
            video: self.video,
            resource: self.resource,
        };
        (self.hour, self.day, cell)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DefineSubjectForm {
    pub name: String,
    pub topics: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubjectForm {
    pub subject: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TopicForm {
    pub subject: String,
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct SlotForm {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub topic: String,
    pub slot: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExamForm {
    pub kind: String,
    pub name: String,
    pub date: String,
    pub net: String,
    pub score: String,
}

impl From<ExamForm> for ExamDraft {
    fn from(form: ExamForm) -> Self {
        ExamDraft {
            kind: form.kind,
            name: form.name,
            date: form.date,
            net: form.net,
            score: form.score,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExamIdForm {
    pub id: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResourceForm {
    pub subject: String,
    pub name: String,
    pub kind: String,
    pub description: String,
    pub link: String,
}

impl From<ResourceForm> for ResourceDraft {
    fn from(form: ResourceForm) -> Self {
        ResourceDraft {
            subject: form.subject,
            name: form.name,
            kind: form.kind,
            description: form.description,
            link: form.link,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResourceKeyForm {
    pub subject: String,
    pub name: String,
}

/// Query string of every GET page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    pub subject: Option<String>,
    pub notice: Option<String>,
    pub level: Option<String>,
}

impl PageQuery {
    /// The banner carried over from the redirect, if any.
    pub fn notice(&self) -> Option<Notice> {
        let message = self.notice.as_deref()?.trim();
        if message.is_empty() {
            return None;
        }
        let level = self
            .level
            .as_deref()
            .and_then(|raw| raw.parse::<NoticeLevel>().ok())
            .unwrap_or_default();
        Some(Notice {
            level,
            message: message.to_owned(),
        })
    }
}

/// Read the bulk slot form: `subject` plus `name_{row}_{slot}` text fields and
/// `done_{row}_{slot}` checkboxes. Unchecked boxes are simply absent.
///
/// # Errors
///
/// Returns `HttpError::BadRequest` for field names whose indices do not parse
/// or point past the slots of a topic.
pub fn parse_slot_sheet(fields: &HashMap<String, String>) -> Result<(String, SlotSheet), HttpError> {
    let subject = fields.get("subject").cloned().unwrap_or_default();
    let mut sheet = SlotSheet::new();
    for (key, value) in fields {
        if let Some(rest) = key.strip_prefix("name_") {
            let (row, slot) = indices(key, rest)?;
            sheet
                .set_name(row, slot, value.trim())
                .map_err(|e| HttpError::BadRequest(e.to_string()))?;
        } else if let Some(rest) = key.strip_prefix("done_") {
            let (row, slot) = indices(key, rest)?;
            sheet
                .set_completed(row, slot, !value.is_empty())
                .map_err(|e| HttpError::BadRequest(e.to_string()))?;
        }
    }
    Ok((subject, sheet))
}

fn indices(key: &str, rest: &str) -> Result<(usize, usize), HttpError> {
    rest.split_once('_')
        .and_then(|(row, slot)| Some((row.parse().ok()?, slot.parse().ok()?)))
        .ok_or_else(|| HttpError::BadRequest(format!("malformed field name: {key}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn slot_sheet_reads_names_and_checkboxes() {
        let (subject, sheet) = parse_slot_sheet(&fields(&[
            ("subject", "Physics"),
            ("name_0_0", " Yellow book "),
            ("done_0_0", "on"),
            ("name_2_1", "Videos"),
        ]))
        .unwrap();

        assert_eq!(subject, "Physics");
        let first = sheet.row(0).unwrap();
        assert_eq!(first[0].name, "Yellow book");
        assert!(first[0].completed);
        let third = sheet.row(2).unwrap();
        assert_eq!(third[1].name, "Videos");
        assert!(!third[1].completed);
        assert!(sheet.row(1).is_none());
    }

    #[test]
    fn malformed_slot_fields_are_rejected() {
        assert!(matches!(
            parse_slot_sheet(&fields(&[("name_x_0", "Book")])),
            Err(HttpError::BadRequest(_))
        ));
        assert!(matches!(
            parse_slot_sheet(&fields(&[("done_0_3", "on")])),
            Err(HttpError::BadRequest(_))
        ));
    }

    #[test]
    fn notice_comes_back_from_the_query() {
        let query = PageQuery {
            notice: Some("Exam added".into()),
            level: Some("warning".into()),
            ..PageQuery::default()
        };
        assert_eq!(query.notice(), Some(Notice::warning("Exam added")));

        let unknown_level = PageQuery {
            notice: Some("Saved".into()),
            level: Some("loud".into()),
            ..PageQuery::default()
        };
        assert_eq!(unknown_level.notice(), Some(Notice::success("Saved")));
        assert_eq!(PageQuery::default().notice(), None);
    }
}
