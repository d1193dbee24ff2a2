use serde::{Deserialize, Serialize};

/// Header shown on every page and report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramInfo {
    pub student_name: String,
    pub program_date: String,
}

impl ProgramInfo {
    #[must_use]
    pub fn new(student_name: impl Into<String>, program_date: impl Into<String>) -> Self {
        Self {
            student_name: student_name.into().trim().to_owned(),
            program_date: program_date.into().trim().to_owned(),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.student_name.is_empty() && self.program_date.is_empty()
    }
}
