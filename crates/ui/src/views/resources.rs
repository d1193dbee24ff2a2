use dioxus::prelude::*;

use crate::views::layout::Layout;
use crate::views::topics::SubjectTabs;
use crate::vm::ResourcesVm;

#[component]
pub fn ResourcesPage(vm: ResourcesVm) -> Element {
    let subject = vm.selected.clone().unwrap_or_default();
    rsx! {
        Layout { layout: vm.layout.clone(),
            section { class: "panel",
                h2 { "Add or update a resource" }
                form { class: "form-row", method: "post", action: "/resources",
                    label { "Subject"
                        select { name: "subject",
                            for name in vm.subjects.iter() {
                                option { value: "{name}", selected: *name == subject, "{name}" }
                            }
                        }
                    }
                    label { "Name"
                        input { r#type: "text", name: "name" }
                    }
                    label { "Type"
                        select { name: "kind",
                            for kind in vm.kinds.iter() {
                                option { value: "{kind}", "{kind}" }
                            }
                        }
                    }
                    label { "Description"
                        input { r#type: "text", name: "description" }
                    }
                    label { "Link"
                        input { r#type: "url", name: "link", placeholder: "https://" }
                    }
                    button { r#type: "submit", "Save" }
                }
            }

            section { class: "panel",
                h2 { "Resources by subject" }
                SubjectTabs { tabs: vm.tabs.clone() }
                if vm.rows.is_empty() {
                    p { class: "empty", "No resources for {subject} yet." }
                } else {
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Type" }
                                th { "Description" }
                                th { "Link" }
                                th {}
                            }
                        }
                        tbody {
                            for row in vm.rows.iter() {
                                tr {
                                    td { "{row.name}" }
                                    td { "{row.kind}" }
                                    td { "{row.description}" }
                                    td {
                                        if let Some(link) = &row.link {
                                            a { href: "{link}", target: "_blank", rel: "noopener", "{link}" }
                                        }
                                    }
                                    td {
                                        form { method: "post", action: "/resources/delete",
                                            input { r#type: "hidden", name: "subject", value: "{subject}" }
                                            input { r#type: "hidden", name: "name", value: "{row.name}" }
                                            button { r#type: "submit", class: "danger", "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                p { class: "empty", "{vm.total} resources in total." }
            }
        }
    }
}
