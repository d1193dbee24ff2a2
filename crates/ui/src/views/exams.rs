use dioxus::prelude::*;

use crate::views::layout::Layout;
use crate::vm::{ExamChartVm, ExamsVm};

#[component]
pub fn ExamsPage(vm: ExamsVm) -> Element {
    rsx! {
        Layout { layout: vm.layout.clone(),
            section { class: "panel",
                h2 { "Add mock exam" }
                form { class: "form-row", method: "post", action: "/exams",
                    label { "Type"
                        select { name: "kind",
                            for kind in vm.kinds.iter() {
                                option { value: "{kind}", "{kind}" }
                            }
                        }
                    }
                    label { "Name"
                        input { r#type: "text", name: "name" }
                    }
                    label { "Date"
                        input { r#type: "date", name: "date", value: "{vm.today}" }
                    }
                    label { "Net"
                        input { r#type: "number", name: "net", step: "0.25" }
                    }
                    label { "Score"
                        input { r#type: "number", name: "score", step: "0.01" }
                    }
                    button { r#type: "submit", "Add" }
                }
            }

            section { class: "panel",
                h2 { "Scores" }
                match &vm.chart {
                    Some(chart) => rsx! { ScoreChart { chart: chart.clone() } },
                    None => rsx! { p { class: "empty", "Add an exam to see the score chart." } },
                }
            }

            section { class: "panel",
                h2 { "All exams" }
                p { a { class: "download-link", href: "/exams.pdf", "Download PDF" } }
                if vm.rows.is_empty() {
                    p { class: "empty", "No exams recorded yet." }
                } else {
                    table {
                        thead {
                            tr {
                                th { "Type" }
                                th { "Name" }
                                th { "Date" }
                                th { "Net" }
                                th { "Score" }
                                th {}
                            }
                        }
                        tbody {
                            for row in vm.rows.iter() {
                                tr {
                                    td { "{row.kind}" }
                                    td { "{row.name}" }
                                    td { "{row.date}" }
                                    td { "{row.net}" }
                                    td { "{row.score}" }
                                    td {
                                        form { method: "post", action: "/exams/delete",
                                            input { r#type: "hidden", name: "id", value: "{row.id}" }
                                            button { r#type: "submit", class: "danger", "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ScoreChart(chart: ExamChartVm) -> Element {
    let bottom = chart.height - chart.padding;
    let right = chart.width - chart.padding;
    rsx! {
        div { class: "chart",
            svg {
                view_box: "0 0 {chart.width} {chart.height}",
                line { class: "chart-axis", x1: "{chart.padding}", y1: "{bottom}", x2: "{right}", y2: "{bottom}" }
                line { class: "chart-axis", x1: "{chart.padding}", y1: "{chart.padding}", x2: "{chart.padding}", y2: "{bottom}" }
                path { class: "chart-line", d: "{chart.path}" }
                for point in chart.points.iter() {
                    circle { class: "chart-point", cx: "{point.x}", cy: "{point.y}", r: "4" }
                }
            }
            p { class: "empty", "Range: {chart.y_min} to {chart.y_max}" }
            ol { class: "chart-labels",
                for point in chart.points.iter() {
                    li { "{point.label}" }
                }
            }
        }
    }
}
