use dioxus::prelude::*;

use crate::vm::{LayoutVm, NavItem};

const STYLE: &str = include_str!("../../assets/style.css");

#[component]
pub fn Layout(layout: LayoutVm, children: Element) -> Element {
    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{layout.title} | {layout.active.label()}" }
                style { dangerous_inner_html: STYLE }
            }
            body {
                div { class: "app-root",
                    header { class: "app-header",
                        h1 { "{layout.title}" }
                        if let Some(line) = &layout.student_line {
                            span { class: "app-student", "{line}" }
                        }
                    }
                    nav { class: "menu-bar",
                        for item in NavItem::ALL {
                            a {
                                class: if item == layout.active { "menu-link menu-link--active" } else { "menu-link" },
                                href: item.href(),
                                "{item.label()}"
                            }
                        }
                    }
                    if let Some(notice) = &layout.notice {
                        div { class: notice.class, "{notice.message}" }
                    }
                    main { {children} }
                }
            }
        }
    }
}
