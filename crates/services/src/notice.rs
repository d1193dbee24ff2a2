use std::fmt;
use std::str::FromStr;

/// Severity of the banner shown after a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeLevel {
    #[default]
    Success,
    Warning,
}

impl NoticeLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
        }
    }
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoticeLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(NoticeLevel::Success),
            "warning" => Ok(NoticeLevel::Warning),
            _ => Err(()),
        }
    }
}

/// Outcome message of a mutation, shown once on the next page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Warnings start with a capital letter whatever the source message.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        let message: String = message.into();
        let mut chars = message.chars();
        let message = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self {
            level: NoticeLevel::Warning,
            message,
        }
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.level == NoticeLevel::Warning
    }
}
