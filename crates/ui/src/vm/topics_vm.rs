use study_core::model::Tracker;

use crate::vm::fmt::{format_percent, query_href};
use crate::vm::layout_vm::LayoutVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotVm {
    pub index: usize,
    pub name: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRowVm {
    pub index: usize,
    pub name: String,
    pub slots: Vec<SlotVm>,
    pub progress: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectTabVm {
    pub name: String,
    pub href: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicsVm {
    pub layout: LayoutVm,
    pub tabs: Vec<SubjectTabVm>,
    pub selected: Option<String>,
    pub rows: Vec<TopicRowVm>,
}

/// Resolve the requested subject, falling back to the first one when the
/// query names nothing known.
#[must_use]
pub fn map_topics(tracker: &Tracker, requested: Option<&str>, layout: LayoutVm) -> TopicsVm {
    let curriculum = &tracker.curriculum;
    let selected = requested
        .filter(|s| curriculum.contains_subject(s))
        .or_else(|| curriculum.first_subject())
        .map(str::to_owned);

    let tabs = curriculum
        .subject_names()
        .map(|name| SubjectTabVm {
            name: name.to_owned(),
            href: query_href("/topics", "subject", name),
            active: selected.as_deref() == Some(name),
        })
        .collect();

    let rows = selected
        .as_deref()
        .and_then(|s| curriculum.topics(s))
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, topic)| {
            let progress = topic.progress();
            let slots = progress
                .slots()
                .iter()
                .enumerate()
                .map(|(index, slot)| SlotVm {
                    index,
                    name: slot.name.clone(),
                    completed: slot.completed,
                })
                .collect();
            #[allow(clippy::cast_precision_loss)]
            let ratio = if progress.filled_count() == 0 {
                0.0
            } else {
                progress.completed_count() as f64 / progress.filled_count() as f64 * 100.0
            };
            TopicRowVm {
                index,
                name: topic.name().to_owned(),
                slots,
                progress: format_percent(study_core::stats::round1(ratio)),
            }
        })
        .collect();

    TopicsVm {
        layout,
        tabs,
        selected,
        rows,
    }
}
