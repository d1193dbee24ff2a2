use dioxus::prelude::*;

use crate::views::layout::Layout;
use crate::vm::StatsVm;

#[component]
pub fn StatsPage(vm: StatsVm) -> Element {
    rsx! {
        Layout { layout: vm.layout.clone(),
            section { class: "panel",
                h2 { "Overview" }
                p { a { class: "download-link", href: "/stats.pdf", "Download PDF report" } }
                div { class: "stat-grid",
                    for line in vm.general.iter() {
                        div { class: "stat-card",
                            div { class: "stat-value", "{line.value}" }
                            div { class: "stat-label", "{line.label}" }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { "Progress by subject" }
                table {
                    thead {
                        tr {
                            th { "Subject" }
                            th { "Topics" }
                            th { "Completed / entered" }
                            th { "Completion" }
                        }
                    }
                    tbody {
                        for subject in vm.subjects.iter() {
                            tr {
                                td { "{subject.subject}" }
                                td { "{subject.topics}" }
                                td { "{subject.slots}" }
                                td {
                                    div { class: "progress",
                                        div { class: "progress-bar", style: "width: {subject.ratio}%" }
                                    }
                                    "{subject.ratio_label}"
                                }
                            }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { "Mock exams" }
                if vm.exams.is_empty() {
                    p { class: "empty", "No exams recorded yet." }
                } else {
                    table {
                        tbody {
                            for line in vm.exams.iter() {
                                tr {
                                    th { "{line.label}" }
                                    td { "{line.value}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { "Weekly schedule" }
                div { class: "progress",
                    div { class: "progress-bar", style: "width: {vm.fill_ratio}%" }
                }
            }
        }
    }
}
