//! Fallback page for unknown paths.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::guard::routes::HOME_PATH;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Layout {
            title: "Not found".to_string(),
            nav_active: String::new(),

            h1 { "Page not found" }
            p { class: "text-muted", "Nothing lives at {path}." }
            a { href: HOME_PATH, "Back to home" }
        }
    }
}
