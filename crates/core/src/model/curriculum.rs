use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every topic tracks exactly this many study resources.
pub const SLOTS_PER_TOPIC: usize = 3;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CurriculumError {
    #[error("subject name cannot be empty")]
    EmptySubjectName,

    #[error("topic name cannot be empty")]
    EmptyTopicName,

    #[error("subject '{0}' already exists")]
    DuplicateSubject(String),

    #[error("topic '{topic}' already exists in '{subject}'")]
    DuplicateTopic { subject: String, topic: String },

    #[error("subject '{0}' does not exist")]
    UnknownSubject(String),

    #[error("topic '{topic}' does not exist in '{subject}'")]
    UnknownTopic { subject: String, topic: String },

    #[error("a subject needs at least one topic")]
    NoTopics,

    #[error("resource slot {0} is out of range")]
    SlotOutOfRange(usize),
}

//
// ─── RESOURCE SLOTS ────────────────────────────────────────────────────────────
//

/// One of the fixed study-resource positions of a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSlot {
    pub name: String,
    pub completed: bool,
}

impl ResourceSlot {
    #[must_use]
    pub fn new(name: impl Into<String>, completed: bool) -> Self {
        Self {
            name: name.into(),
            completed,
        }
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// A slot only counts as done when it names a resource.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.is_filled() && self.completed
    }
}

/// The three resource slots of a topic. The array never shrinks: clearing a
/// slot resets it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicProgress {
    slots: [ResourceSlot; SLOTS_PER_TOPIC],
}

impl TopicProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a persisted list of any length, padding or truncating to
    /// `SLOTS_PER_TOPIC`.
    #[must_use]
    pub fn from_slots(slots: impl IntoIterator<Item = ResourceSlot>) -> Self {
        let mut progress = Self::default();
        for (target, slot) in progress.slots.iter_mut().zip(slots) {
            *target = slot;
        }
        progress
    }

    #[must_use]
    pub fn with_slots(slots: [ResourceSlot; SLOTS_PER_TOPIC]) -> Self {
        Self { slots }
    }

    #[must_use]
    pub fn slots(&self) -> &[ResourceSlot; SLOTS_PER_TOPIC] {
        &self.slots
    }

    /// # Errors
    ///
    /// Returns `CurriculumError::SlotOutOfRange` if `index >= SLOTS_PER_TOPIC`.
    pub fn clear_slot(&mut self, index: usize) -> Result<(), CurriculumError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(CurriculumError::SlotOutOfRange(index))?;
        *slot = ResourceSlot::default();
        Ok(())
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_filled()).count()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_completed()).count()
    }
}

/// Submitted resource slots for the topics of one subject, keyed by the
/// topic's position in the subject's list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSheet {
    rows: BTreeMap<usize, [ResourceSlot; SLOTS_PER_TOPIC]>,
}

impl SlotSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `CurriculumError::SlotOutOfRange` for an invalid slot index.
    pub fn set_name(
        &mut self,
        row: usize,
        slot: usize,
        name: impl Into<String>,
    ) -> Result<(), CurriculumError> {
        self.slot_mut(row, slot)?.name = name.into();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CurriculumError::SlotOutOfRange` for an invalid slot index.
    pub fn set_completed(
        &mut self,
        row: usize,
        slot: usize,
        completed: bool,
    ) -> Result<(), CurriculumError> {
        self.slot_mut(row, slot)?.completed = completed;
        Ok(())
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[ResourceSlot; SLOTS_PER_TOPIC]> {
        self.rows.get(&row)
    }

    fn slot_mut(&mut self, row: usize, slot: usize) -> Result<&mut ResourceSlot, CurriculumError> {
        if slot >= SLOTS_PER_TOPIC {
            return Err(CurriculumError::SlotOutOfRange(slot));
        }
        Ok(&mut self.rows.entry(row).or_default()[slot])
    }
}

//
// ─── TOPICS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    name: String,
    progress: TopicProgress,
}

impl Topic {
    #[must_use]
    pub fn new(name: impl Into<String>, progress: TopicProgress) -> Self {
        Self {
            name: name.into(),
            progress,
        }
    }

    #[must_use]
    pub fn fresh(name: impl Into<String>) -> Self {
        Self::new(name, TopicProgress::new())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn progress(&self) -> &TopicProgress {
        &self.progress
    }
}

//
// ─── CURRICULUM ────────────────────────────────────────────────────────────────
//

/// Subjects in insertion order, each with its ordered topics. Topic names
/// are unique among topics added through this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Curriculum {
    subjects: IndexMap<String, Vec<Topic>>,
}

impl Curriculum {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The subjects a fresh install starts with.
    #[must_use]
    pub fn builtin() -> Self {
        let defaults: [(&str, [&str; 3]); 4] = [
            ("Mathematics", ["Functions", "Sets", "Equations"]),
            ("Turkish", ["Paragraph", "Grammar", "Sentence Meaning"]),
            ("Physics", ["Motion", "Force", "Energy"]),
            ("Geometry", ["Triangles", "Quadrilaterals", "Circle"]),
        ];
        Self::from_subjects(defaults.into_iter().map(|(subject, topics)| {
            (
                subject.to_owned(),
                topics.into_iter().map(Topic::fresh).collect(),
            )
        }))
    }

    /// Rebuild from persisted data as stored. Topic uniqueness is checked
    /// when topics are added, so duplicate names in a file are kept; lookups
    /// by name resolve to the first of them.
    #[must_use]
    pub fn from_subjects(subjects: impl IntoIterator<Item = (String, Vec<Topic>)>) -> Self {
        let mut curriculum = Self::new();
        for (subject, topics) in subjects {
            curriculum.subjects.entry(subject).or_default().extend(topics);
        }
        curriculum
    }

    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.subjects.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn contains_subject(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }

    pub fn subject_names(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    #[must_use]
    pub fn first_subject(&self) -> Option<&str> {
        self.subject_names().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Topic])> {
        self.subjects
            .iter()
            .map(|(name, topics)| (name.as_str(), topics.as_slice()))
    }

    #[must_use]
    pub fn topics(&self, subject: &str) -> Option<&[Topic]> {
        self.subjects.get(subject).map(Vec::as_slice)
    }

    #[must_use]
    pub fn progress(&self, subject: &str, topic: &str) -> Option<&TopicProgress> {
        self.topics(subject)?
            .iter()
            .find(|t| t.name == topic)
            .map(Topic::progress)
    }

    /// Add an empty subject.
    ///
    /// # Errors
    ///
    /// Returns `EmptySubjectName` for blank names and `DuplicateSubject` when
    /// the subject already exists; the curriculum is left unchanged.
    pub fn add_subject(&mut self, name: &str) -> Result<String, CurriculumError> {
        let name = normalize(name).ok_or(CurriculumError::EmptySubjectName)?;
        if self.subjects.contains_key(&name) {
            return Err(CurriculumError::DuplicateSubject(name));
        }
        self.subjects.insert(name.clone(), Vec::new());
        Ok(name)
    }

    /// Create or replace a subject together with its topic list. Every topic
    /// starts with empty progress.
    ///
    /// # Errors
    ///
    /// Returns `EmptySubjectName` or `NoTopics` when there is nothing to store.
    pub fn define_subject<I, S>(&mut self, name: &str, topics: I) -> Result<usize, CurriculumError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = normalize(name).ok_or(CurriculumError::EmptySubjectName)?;
        let mut fresh: Vec<Topic> = Vec::new();
        for topic in topics {
            if let Some(topic) = normalize(topic.as_ref()) {
                if !fresh.iter().any(|t| t.name == topic) {
                    fresh.push(Topic::fresh(topic));
                }
            }
        }
        if fresh.is_empty() {
            return Err(CurriculumError::NoTopics);
        }
        let count = fresh.len();
        self.subjects.insert(name, fresh);
        Ok(count)
    }

    /// # Errors
    ///
    /// Returns `EmptyTopicName`, `UnknownSubject` or `DuplicateTopic`.
    pub fn add_topic(&mut self, subject: &str, topic: &str) -> Result<String, CurriculumError> {
        let topic = normalize(topic).ok_or(CurriculumError::EmptyTopicName)?;
        let topics = self.topics_mut(subject)?;
        if topics.iter().any(|t| t.name == topic) {
            return Err(CurriculumError::DuplicateTopic {
                subject: subject.to_owned(),
                topic,
            });
        }
        topics.push(Topic::fresh(topic.clone()));
        Ok(topic)
    }

    /// Remove a topic along with its progress.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSubject` or `UnknownTopic`.
    pub fn remove_topic(&mut self, subject: &str, topic: &str) -> Result<Topic, CurriculumError> {
        let topics = self.topics_mut(subject)?;
        let position = topics
            .iter()
            .position(|t| t.name == topic)
            .ok_or_else(|| CurriculumError::UnknownTopic {
                subject: subject.to_owned(),
                topic: topic.to_owned(),
            })?;
        Ok(topics.remove(position))
    }

    /// # Errors
    ///
    /// Returns `UnknownSubject`, `UnknownTopic` or `SlotOutOfRange`.
    pub fn clear_slot(
        &mut self,
        subject: &str,
        topic: &str,
        index: usize,
    ) -> Result<(), CurriculumError> {
        let topics = self.topics_mut(subject)?;
        let entry = topics
            .iter_mut()
            .find(|t| t.name == topic)
            .ok_or_else(|| CurriculumError::UnknownTopic {
                subject: subject.to_owned(),
                topic: topic.to_owned(),
            })?;
        entry.progress.clear_slot(index)
    }

    /// Overwrite the slots of every topic in `subject`. Topics without a row
    /// in the sheet are reset to empty slots.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSubject`.
    pub fn apply_slot_sheet(
        &mut self,
        subject: &str,
        sheet: &SlotSheet,
    ) -> Result<usize, CurriculumError> {
        let topics = self.topics_mut(subject)?;
        for (row, topic) in topics.iter_mut().enumerate() {
            topic.progress = sheet
                .row(row)
                .cloned()
                .map(TopicProgress::with_slots)
                .unwrap_or_default();
        }
        Ok(topics.len())
    }

    fn topics_mut(&mut self, subject: &str) -> Result<&mut Vec<Topic>, CurriculumError> {
        self.subjects
            .get_mut(subject)
            .ok_or_else(|| CurriculumError::UnknownSubject(subject.to_owned()))
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_curriculum_has_four_subjects_with_empty_progress() {
        let curriculum = Curriculum::builtin();
        assert_eq!(curriculum.subject_count(), 4);
        assert_eq!(curriculum.topic_count(), 12);
        assert_eq!(curriculum.first_subject(), Some("Mathematics"));
        let progress = curriculum.progress("Physics", "Force").unwrap();
        assert_eq!(progress.filled_count(), 0);
    }

    #[test]
    fn adding_a_subject_twice_is_rejected_without_change() {
        let mut curriculum = Curriculum::builtin();
        curriculum.add_subject("Chemistry").unwrap();
        let before = curriculum.clone();

        let err = curriculum.add_subject("  Chemistry ").unwrap_err();
        assert_eq!(err, CurriculumError::DuplicateSubject("Chemistry".into()));
        assert_eq!(curriculum, before);
        assert_eq!(
            curriculum.add_subject("   "),
            Err(CurriculumError::EmptySubjectName)
        );
    }

    #[test]
    fn delete_then_re_add_topic_yields_fresh_slots() {
        let mut curriculum = Curriculum::builtin();
        curriculum.add_topic("Physics", "Waves").unwrap();
        let mut sheet = SlotSheet::new();
        sheet.set_name(3, 0, "Blue Book").unwrap();
        sheet.set_completed(3, 0, true).unwrap();
        curriculum.apply_slot_sheet("Physics", &sheet).unwrap();
        assert_eq!(
            curriculum.progress("Physics", "Waves").unwrap().completed_count(),
            1
        );

        let removed = curriculum.remove_topic("Physics", "Waves").unwrap();
        assert_eq!(removed.name(), "Waves");
        assert!(curriculum.progress("Physics", "Waves").is_none());
        assert!(
            !curriculum
                .topics("Physics")
                .unwrap()
                .iter()
                .any(|t| t.name() == "Waves")
        );

        curriculum.add_topic("Physics", "Waves").unwrap();
        assert_eq!(
            curriculum.progress("Physics", "Waves").unwrap(),
            &TopicProgress::new()
        );
    }

    #[test]
    fn add_topic_validates_input() {
        let mut curriculum = Curriculum::builtin();
        assert_eq!(
            curriculum.add_topic("Physics", " "),
            Err(CurriculumError::EmptyTopicName)
        );
        assert!(matches!(
            curriculum.add_topic("Biology", "Cells"),
            Err(CurriculumError::UnknownSubject(_))
        ));
        assert!(matches!(
            curriculum.add_topic("Physics", "Motion"),
            Err(CurriculumError::DuplicateTopic { .. })
        ));
    }

    #[test]
    fn slot_sheet_resets_rows_that_were_not_submitted() {
        let mut curriculum = Curriculum::builtin();
        let mut sheet = SlotSheet::new();
        sheet.set_name(0, 2, "Video series").unwrap();
        sheet.set_completed(0, 2, true).unwrap();
        sheet.set_name(1, 0, "Workbook").unwrap();
        curriculum.apply_slot_sheet("Mathematics", &sheet).unwrap();

        let mut second = SlotSheet::new();
        second.set_name(1, 1, "Other").unwrap();
        curriculum.apply_slot_sheet("Mathematics", &second).unwrap();

        let functions = curriculum.progress("Mathematics", "Functions").unwrap();
        assert_eq!(functions, &TopicProgress::new());
        let sets = curriculum.progress("Mathematics", "Sets").unwrap();
        assert_eq!(sets.slots()[0], ResourceSlot::default());
        assert_eq!(sets.slots()[1], ResourceSlot::new("Other", false));
    }

    #[test]
    fn clear_slot_keeps_three_positions() {
        let mut curriculum = Curriculum::builtin();
        let mut sheet = SlotSheet::new();
        sheet.set_name(0, 1, "Atlas").unwrap();
        sheet.set_completed(0, 1, true).unwrap();
        curriculum.apply_slot_sheet("Geometry", &sheet).unwrap();

        curriculum.clear_slot("Geometry", "Triangles", 1).unwrap();
        let progress = curriculum.progress("Geometry", "Triangles").unwrap();
        assert_eq!(progress.slots().len(), SLOTS_PER_TOPIC);
        assert_eq!(progress.filled_count(), 0);
        assert_eq!(
            curriculum.clear_slot("Geometry", "Triangles", 3),
            Err(CurriculumError::SlotOutOfRange(3))
        );
    }

    #[test]
    fn define_subject_replaces_topics_and_dedupes() {
        let mut curriculum = Curriculum::builtin();
        let count = curriculum
            .define_subject("Physics", ["Optics", " Optics ", "", "Heat"])
            .unwrap();
        assert_eq!(count, 2);
        let names: Vec<_> = curriculum
            .topics("Physics")
            .unwrap()
            .iter()
            .map(Topic::name)
            .collect();
        assert_eq!(names, ["Optics", "Heat"]);
        assert_eq!(
            curriculum.define_subject("Biology", ["  "]),
            Err(CurriculumError::NoTopics)
        );
    }

    #[test]
    fn progress_from_persisted_slots_is_always_three_long() {
        let short = TopicProgress::from_slots(vec![ResourceSlot::new("A", true)]);
        assert_eq!(short.slots()[0], ResourceSlot::new("A", true));
        assert_eq!(short.slots()[2], ResourceSlot::default());

        let long = TopicProgress::from_slots((0..5).map(|i| ResourceSlot::new(i.to_string(), false)));
        assert_eq!(long.slots()[2].name, "2");
    }

    #[test]
    fn completion_requires_a_named_slot() {
        let progress = TopicProgress::from_slots(vec![
            ResourceSlot::new("", true),
            ResourceSlot::new("Book", true),
            ResourceSlot::new("Notes", false),
        ]);
        assert_eq!(progress.filled_count(), 2);
        assert_eq!(progress.completed_count(), 1);
    }

    #[test]
    fn duplicate_topics_survive_load_but_not_insert() {
        let mut curriculum = Curriculum::from_subjects(vec![(
            "History".to_string(),
            vec![
                Topic::fresh("Ottoman"),
                Topic::new(
                    "Ottoman",
                    TopicProgress::from_slots(vec![ResourceSlot::new("x", true)]),
                ),
            ],
        )]);
        assert_eq!(curriculum.topic_count(), 2);
        assert_eq!(
            curriculum.progress("History", "Ottoman").unwrap().filled_count(),
            0
        );
        let topics = curriculum.topics("History").unwrap();
        assert_eq!(topics[1].progress().completed_count(), 1);

        assert!(matches!(
            curriculum.add_topic("History", "Ottoman"),
            Err(CurriculumError::DuplicateTopic { .. })
        ));
        assert_eq!(curriculum.topic_count(), 2);
    }
}
