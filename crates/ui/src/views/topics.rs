use dioxus::prelude::*;

use crate::views::layout::Layout;
use crate::vm::{SubjectTabVm, TopicRowVm, TopicsVm};

#[component]
pub fn TopicsPage(vm: TopicsVm) -> Element {
    let subject = vm.selected.clone().unwrap_or_default();
    rsx! {
        Layout { layout: vm.layout.clone(),
            section { class: "panel",
                h2 { "Subjects" }
                SubjectTabs { tabs: vm.tabs.clone() }
                form { class: "form-row", method: "post", action: "/topics/subject",
                    label { "New subject"
                        input { r#type: "text", name: "subject" }
                    }
                    button { r#type: "submit", class: "secondary", "Add subject" }
                }
            }

            if vm.selected.is_some() {
                section { class: "panel",
                    h2 { "{subject}" }
                    form { class: "form-row", method: "post", action: "/topics/topic",
                        input { r#type: "hidden", name: "subject", value: "{subject}" }
                        label { "New topic"
                            input { r#type: "text", name: "topic" }
                        }
                        button { r#type: "submit", class: "secondary", "Add topic" }
                    }
                }

                section { class: "panel",
                    if vm.rows.is_empty() {
                        p { class: "empty", "No topics yet." }
                    } else {
                        form { method: "post", action: "/topics/slots",
                            input { r#type: "hidden", name: "subject", value: "{subject}" }
                            table {
                                thead {
                                    tr {
                                        th { "Topic" }
                                        th { "Resource 1" }
                                        th { "Resource 2" }
                                        th { "Resource 3" }
                                        th { "Done" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for row in vm.rows.iter() {
                                        TopicRow { row: row.clone() }
                                    }
                                }
                            }
                            p { button { r#type: "submit", "Save progress" } }
                        }
                        for row in vm.rows.iter() {
                            HiddenTopicForms { subject: subject.clone(), row: row.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn SubjectTabs(tabs: Vec<SubjectTabVm>) -> Element {
    rsx! {
        div { class: "subject-tabs",
            for tab in tabs.iter() {
                a {
                    class: if tab.active { "menu-link menu-link--active" } else { "menu-link" },
                    href: "{tab.href}",
                    "{tab.name}"
                }
            }
        }
    }
}

#[component]
fn TopicRow(row: TopicRowVm) -> Element {
    let index = row.index;
    rsx! {
        tr {
            td { "{row.name}" }
            for slot in row.slots.iter() {
                td {
                    div { class: if slot.completed { "slot slot--done" } else { "slot" },
                        input {
                            r#type: "text",
                            name: "name_{index}_{slot.index}",
                            value: "{slot.name}",
                        }
                        input {
                            r#type: "checkbox",
                            name: "done_{index}_{slot.index}",
                            value: "on",
                            checked: slot.completed,
                        }
                        button {
                            r#type: "submit",
                            class: "secondary",
                            "form": "clear-{index}-{slot.index}",
                            title: "Clear",
                            "x"
                        }
                    }
                }
            }
            td { "{row.progress}" }
            td {
                button { r#type: "submit", class: "danger", "form": "delete-{index}", "Delete" }
            }
        }
    }
}

/// Forms cannot nest, so the per-row actions live outside the bulk form and
/// the buttons reach them through the `form` attribute.
#[component]
fn HiddenTopicForms(subject: String, row: TopicRowVm) -> Element {
    let index = row.index;
    rsx! {
        form { id: "delete-{index}", method: "post", action: "/topics/topic/delete",
            input { r#type: "hidden", name: "subject", value: "{subject}" }
            input { r#type: "hidden", name: "topic", value: "{row.name}" }
        }
        for slot in row.slots.iter() {
            form { id: "clear-{index}-{slot.index}", method: "post", action: "/topics/slot/clear",
                input { r#type: "hidden", name: "subject", value: "{subject}" }
                input { r#type: "hidden", name: "topic", value: "{row.name}" }
                input { r#type: "hidden", name: "slot", value: "{slot.index}" }
            }
        }
    }
}
