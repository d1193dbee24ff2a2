use dioxus::prelude::*;

use crate::views::layout::Layout;
use crate::vm::{CellVm, DashboardVm};

#[component]
pub fn DashboardPage(vm: DashboardVm) -> Element {
    rsx! {
        Layout { layout: vm.layout.clone(),
            section { class: "panel",
                h2 { "Program info" }
                form { class: "form-row", method: "post", action: "/program-info",
                    label { "Student name"
                        input { r#type: "text", name: "student_name", value: "{vm.student_name}" }
                    }
                    label { "Program date"
                        input { r#type: "text", name: "program_date", value: "{vm.program_date}" }
                    }
                    button { r#type: "submit", "Save" }
                }
            }

            section { class: "panel",
                h2 { "Weekly schedule" }
                p {
                    "{vm.filled} slots planned. "
                    a { class: "download-link", href: "/schedule.pdf", "Download PDF" }
                }
                table { class: "schedule-table",
                    thead {
                        tr {
                            th { "Hour" }
                            for day in vm.days.iter() {
                                th { "{day}" }
                            }
                        }
                    }
                    tbody {
                        for row in vm.rows.iter() {
                            tr {
                                td { class: "hour", "{row.hour}" }
                                for cell in row.cells.iter() {
                                    td {
                                        match cell {
                                            Some(cell) => rsx! { ScheduleCellView { cell: cell.clone() } },
                                            None => rsx! { span { class: "cell-empty", "-" } },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { "Edit a slot" }
                form { class: "form-row", method: "post", action: "/schedule/cell",
                    label { "Hour"
                        select { name: "hour",
                            for hour in vm.hours.iter() {
                                option { value: "{hour}", "{hour}" }
                            }
                        }
                    }
                    label { "Day"
                        select { name: "day",
                            for day in vm.days.iter() {
                                option { value: "{day}", "{day}" }
                            }
                        }
                    }
                    label { "Subject"
                        select { name: "subject",
                            option { value: "", "(clear slot)" }
                            for subject in vm.subjects.iter() {
                                option { value: "{subject.name}", "{subject.name}" }
                            }
                        }
                    }
                    label { "Topic"
                        input { r#type: "text", name: "topic", list: "topic-options" }
                    }
                    label { "Question type"
                        input { r#type: "text", name: "exercise_type" }
                    }
                    label { "Question count"
                        input { r#type: "text", name: "exercise_count" }
                    }
                    label { "Video link"
                        input { r#type: "text", name: "video" }
                    }
                    label { "Resource"
                        input { r#type: "text", name: "resource" }
                    }
                    button { r#type: "submit", "Save slot" }
                }
                datalist { id: "topic-options",
                    for subject in vm.subjects.iter() {
                        for topic in subject.topics.iter() {
                            option { value: "{topic}", "{subject.name}" }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { "Add a lesson" }
                form { method: "post", action: "/subjects/define",
                    div { class: "form-row",
                        label { "Lesson name"
                            input { r#type: "text", name: "name" }
                        }
                        label { "Topics (one per line)"
                            textarea { name: "topics", rows: "4" }
                        }
                        button { r#type: "submit", "Add lesson" }
                    }
                }
            }
        }
    }
}

#[component]
fn ScheduleCellView(cell: CellVm) -> Element {
    rsx! {
        span { class: "cell-subject cell-line", "{cell.subject}" }
        for line in cell.lines.iter() {
            span { class: "cell-line", "{line}" }
        }
        if let Some(video) = &cell.video {
            a { class: "cell-line", href: "{video}", target: "_blank", rel: "noopener", "Video" }
        }
    }
}
