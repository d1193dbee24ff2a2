use dioxus::core::Properties;
use dioxus::prelude::*;

/// Server-render a page component into a complete HTML document.
pub fn render_document<P: Properties>(page: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(page, props);
    dom.rebuild_in_place();
    format!("<!DOCTYPE html>\n{}", dioxus_ssr::render(&dom))
}
