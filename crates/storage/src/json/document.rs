use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use study_core::model::{
    Curriculum, Day, ExamId, ExamKind, ExamLog, ExamRecord, HourSlot, ProgramInfo, Resource,
    ResourceKind, ResourceLibrary, ResourceSlot, ScheduleCell, Topic, TopicProgress, Tracker,
    WeeklySchedule,
};
use tracing::warn;

use super::migrate::CURRENT_SCHEMA_VERSION;

/// On-disk shape of the tracker.
///
/// Every key is optional on the way in so that hand-edited or partial files
/// still load; missing sections fall back to defaults.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TrackerDocument {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub program_info: ProgramInfo,
    #[serde(default)]
    pub schedule: IndexMap<String, IndexMap<String, ScheduleCell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<IndexMap<String, Vec<String>>>,
    #[serde(default)]
    pub topic_progress: IndexMap<String, IndexMap<String, Vec<ResourceSlot>>>,
    #[serde(default)]
    pub exams: Vec<ExamEntry>,
    #[serde(default)]
    pub next_exam_id: Option<u64>,
    #[serde(default)]
    pub resources: IndexMap<String, IndexMap<String, ResourceEntry>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ExamEntry {
    pub id: u64,
    pub kind: ExamKind,
    pub name: String,
    pub date: NaiveDate,
    pub net: f64,
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ResourceEntry {
    #[serde(default)]
    pub kind: ResourceKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl TrackerDocument {
    pub(crate) fn from_tracker(tracker: &Tracker) -> Self {
        let mut schedule: IndexMap<String, IndexMap<String, ScheduleCell>> = IndexMap::new();
        for hour in HourSlot::all() {
            for day in Day::ALL {
                if let Some(cell) = tracker.schedule.cell(hour, day) {
                    schedule
                        .entry(hour.label())
                        .or_default()
                        .insert(day.label().to_owned(), cell.clone());
                }
            }
        }

        let mut subjects = IndexMap::new();
        let mut topic_progress: IndexMap<String, IndexMap<String, Vec<ResourceSlot>>> =
            IndexMap::new();
        for (subject, topics) in tracker.curriculum.iter() {
            subjects.insert(
                subject.to_owned(),
                topics.iter().map(|t| t.name().to_owned()).collect(),
            );
            let progress = topic_progress.entry(subject.to_owned()).or_default();
            // Progress is keyed by name, so a duplicate topic keeps the
            // first occurrence's slots.
            for topic in topics {
                progress
                    .entry(topic.name().to_owned())
                    .or_insert_with(|| topic.progress().slots().to_vec());
            }
        }

        let exams = tracker
            .exams
            .records()
            .iter()
            .map(|r| ExamEntry {
                id: r.id().value(),
                kind: r.kind(),
                name: r.name().to_owned(),
                date: r.date(),
                net: r.net(),
                score: r.score(),
            })
            .collect();

        let mut resources: IndexMap<String, IndexMap<String, ResourceEntry>> = IndexMap::new();
        for (subject, name, resource) in tracker.resources.iter() {
            resources.entry(subject.to_owned()).or_default().insert(
                name.to_owned(),
                ResourceEntry {
                    kind: resource.kind(),
                    description: resource.description().to_owned(),
                    link: resource.link().map(str::to_owned),
                },
            );
        }

        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            program_info: tracker.program.clone(),
            schedule,
            subjects: Some(subjects),
            topic_progress,
            exams,
            next_exam_id: Some(tracker.exams.next_id().value()),
            resources,
        }
    }

    pub(crate) fn into_tracker(self) -> Tracker {
        let mut schedule = WeeklySchedule::new();
        for (raw_hour, days) in self.schedule {
            let Ok(hour) = raw_hour.parse::<HourSlot>() else {
                warn!(hour = %raw_hour, "skipping schedule row with unknown hour");
                continue;
            };
            for (raw_day, cell) in days {
                let Ok(day) = raw_day.parse::<Day>() else {
                    warn!(day = %raw_day, "skipping schedule cell with unknown day");
                    continue;
                };
                schedule.set_cell(hour, day, cell);
            }
        }

        let curriculum = match self.subjects {
            None => Curriculum::builtin(),
            Some(subjects) => {
                let mut progress = self.topic_progress;
                Curriculum::from_subjects(subjects.into_iter().map(|(subject, names)| {
                    let mut stored = progress.shift_remove(&subject).unwrap_or_default();
                    let topics = names
                        .into_iter()
                        .map(|name| {
                            let slots = stored.shift_remove(&name).unwrap_or_default();
                            Topic::new(name, TopicProgress::from_slots(slots))
                        })
                        .collect();
                    (subject, topics)
                }))
            }
        };

        let records = self
            .exams
            .into_iter()
            .map(|e| {
                ExamRecord::from_persisted(
                    ExamId::new(e.id),
                    e.kind,
                    e.name,
                    e.date,
                    e.net,
                    e.score,
                )
            })
            .collect();
        let exams = ExamLog::from_persisted(records, ExamId::new(self.next_exam_id.unwrap_or(1)));

        let mut resources = ResourceLibrary::new();
        for (subject, entries) in self.resources {
            for (name, entry) in entries {
                resources.upsert(
                    subject.clone(),
                    name,
                    Resource::from_persisted(entry.kind, entry.description, entry.link),
                );
            }
        }

        Tracker {
            program: self.program_info,
            schedule,
            curriculum,
            exams,
            resources,
        }
    }
}
