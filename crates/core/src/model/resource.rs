use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResourceError {
    #[error("resource name cannot be empty")]
    EmptyName,

    #[error("a subject must be selected")]
    EmptySubject,

    #[error("unknown resource type: {0}")]
    UnknownKind(String),

    #[error("invalid link: {0}")]
    InvalidLink(String),

    #[error("resource '{name}' does not exist in '{subject}'")]
    NotFound { subject: String, name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResourceKind {
    Book,
    Video,
    #[serde(rename = "PDF")]
    Pdf,
    Website,
    App,
    #[default]
    Other,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Book,
        ResourceKind::Video,
        ResourceKind::Pdf,
        ResourceKind::Website,
        ResourceKind::App,
        ResourceKind::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Book => "Book",
            ResourceKind::Video => "Video",
            ResourceKind::Pdf => "PDF",
            ResourceKind::Website => "Website",
            ResourceKind::App => "App",
            ResourceKind::Other => "Other",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResourceKind {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ResourceError::UnknownKind(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    kind: ResourceKind,
    description: String,
    link: Option<String>,
}

impl Resource {
    #[must_use]
    pub fn from_persisted(kind: ResourceKind, description: String, link: Option<String>) -> Self {
        Self {
            kind,
            description,
            link: link.filter(|l| !l.trim().is_empty()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

/// Raw resource input from the management form.
#[derive(Clone, Debug, Default)]
pub struct ResourceDraft {
    pub subject: String,
    pub name: String,
    pub kind: String,
    pub description: String,
    pub link: String,
}

impl ResourceDraft {
    /// Validate into `(subject, name, resource)`.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError` for blank names/subjects, unknown kinds, or a
    /// link that is not an absolute URL.
    pub fn validate(self) -> Result<(String, String, Resource), ResourceError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ResourceError::EmptyName);
        }
        let subject = self.subject.trim();
        if subject.is_empty() {
            return Err(ResourceError::EmptySubject);
        }
        let kind = if self.kind.trim().is_empty() {
            ResourceKind::default()
        } else {
            self.kind.parse()?
        };
        let link = self.link.trim();
        let link = if link.is_empty() {
            None
        } else {
            Url::parse(link).map_err(|_| ResourceError::InvalidLink(link.to_owned()))?;
            Some(link.to_owned())
        };
        Ok((
            subject.to_owned(),
            name.to_owned(),
            Resource {
                kind,
                description: self.description.trim().to_owned(),
                link,
            },
        ))
    }
}

/// Study resources grouped by subject, both levels in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceLibrary {
    subjects: IndexMap<String, IndexMap<String, Resource>>,
}

impl ResourceLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name` under `subject`. Returns `true` when an
    /// existing resource was replaced.
    pub fn upsert(&mut self, subject: String, name: String, resource: Resource) -> bool {
        self.subjects
            .entry(subject)
            .or_default()
            .insert(name, resource)
            .is_some()
    }

    /// Removal keeps the order of the remaining resources.
    pub fn remove(&mut self, subject: &str, name: &str) -> Option<Resource> {
        self.subjects.get_mut(subject)?.shift_remove(name)
    }

    #[must_use]
    pub fn get(&self, subject: &str, name: &str) -> Option<&Resource> {
        self.subjects.get(subject)?.get(name)
    }

    pub fn for_subject(&self, subject: &str) -> impl Iterator<Item = (&str, &Resource)> {
        self.subjects
            .get(subject)
            .into_iter()
            .flat_map(|resources| resources.iter().map(|(name, r)| (name.as_str(), r)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Resource)> {
        self.subjects.iter().flat_map(|(subject, resources)| {
            resources
                .iter()
                .map(move |(name, r)| (subject.as_str(), name.as_str(), r))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.values().map(IndexMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(subject: &str, name: &str, link: &str) -> ResourceDraft {
        ResourceDraft {
            subject: subject.into(),
            name: name.into(),
            kind: "Book".into(),
            description: " Orange cover ".into(),
            link: link.into(),
        }
    }

    #[test]
    fn validate_normalizes_and_checks_links() {
        let (subject, name, resource) = draft(" Physics ", " Fundamentals ", "https://example.org/book")
            .validate()
            .unwrap();
        assert_eq!(subject, "Physics");
        assert_eq!(name, "Fundamentals");
        assert_eq!(resource.description(), "Orange cover");
        assert_eq!(resource.link(), Some("https://example.org/book"));

        assert_eq!(
            draft("Physics", "X", "not a url").validate(),
            Err(ResourceError::InvalidLink("not a url".into()))
        );
        assert_eq!(
            draft("Physics", " ", "").validate(),
            Err(ResourceError::EmptyName)
        );
        assert_eq!(
            draft("", "X", "").validate(),
            Err(ResourceError::EmptySubject)
        );
    }

    #[test]
    fn upsert_overwrites_same_name_in_subject() {
        let mut library = ResourceLibrary::new();
        let (s, n, r) = draft("Physics", "Fundamentals", "").validate().unwrap();
        assert!(!library.upsert(s, n, r));

        let mut second = draft("Physics", "Fundamentals", "");
        second.kind = "video".into();
        let (s, n, r) = second.validate().unwrap();
        assert!(library.upsert(s, n, r));

        assert_eq!(library.len(), 1);
        assert_eq!(
            library.get("Physics", "Fundamentals").unwrap().kind(),
            ResourceKind::Video
        );
    }

    #[test]
    fn remove_only_touches_the_named_entry() {
        let mut library = ResourceLibrary::new();
        for name in ["A", "B", "C"] {
            let (s, n, r) = draft("Geometry", name, "").validate().unwrap();
            library.upsert(s, n, r);
        }
        assert!(library.remove("Geometry", "B").is_some());
        assert!(library.remove("Geometry", "B").is_none());
        assert!(library.remove("History", "A").is_none());
        let names: Vec<_> = library.for_subject("Geometry").map(|(n, _)| n).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn blank_kind_defaults_to_other() {
        let mut input = draft("Physics", "Notes", "");
        input.kind = String::new();
        let (_, _, resource) = input.validate().unwrap();
        assert_eq!(resource.kind(), ResourceKind::Other);
        assert_eq!("pdf".parse::<ResourceKind>().unwrap(), ResourceKind::Pdf);
    }
}
