use study_core::model::{ResourceKind, Tracker};

use crate::vm::fmt::query_href;
use crate::vm::layout_vm::LayoutVm;
use crate::vm::topics_vm::SubjectTabVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceRowVm {
    pub name: String,
    pub kind: &'static str,
    pub description: String,
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcesVm {
    pub layout: LayoutVm,
    pub tabs: Vec<SubjectTabVm>,
    pub subjects: Vec<String>,
    pub kinds: Vec<&'static str>,
    pub selected: Option<String>,
    pub rows: Vec<ResourceRowVm>,
    pub total: usize,
}

#[must_use]
pub fn map_resources(tracker: &Tracker, requested: Option<&str>, layout: LayoutVm) -> ResourcesVm {
    let curriculum = &tracker.curriculum;
    let selected = requested
        .filter(|s| curriculum.contains_subject(s))
        .or_else(|| curriculum.first_subject())
        .map(str::to_owned);

    let tabs = curriculum
        .subject_names()
        .map(|name| SubjectTabVm {
            name: name.to_owned(),
            href: query_href("/resources", "subject", name),
            active: selected.as_deref() == Some(name),
        })
        .collect();

    let rows = selected
        .as_deref()
        .map(|subject| {
            tracker
                .resources
                .for_subject(subject)
                .map(|(name, r)| ResourceRowVm {
                    name: name.to_owned(),
                    kind: r.kind().label(),
                    description: r.description().to_owned(),
                    link: r.link().map(str::to_owned),
                })
                .collect()
        })
        .unwrap_or_default();

    ResourcesVm {
        layout,
        tabs,
        subjects: curriculum.subject_names().map(str::to_owned).collect(),
        kinds: ResourceKind::ALL.into_iter().map(ResourceKind::label).collect(),
        selected,
        rows,
        total: tracker.resources.len(),
    }
}
