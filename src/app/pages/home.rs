//! Home page component.
//!
//! Public landing page; customers also land here after signing in.

use dioxus::prelude::*;
use market_types::Role;

use crate::app::components::Layout;
use crate::app::session::use_session;
use crate::guard::landing_path;
use crate::guard::routes::{BECOME_VENDOR_PATH, SIGN_IN_PATH};

/// Home page component.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let state = session.state();

    let call_to_action = if state.is_loading() {
        rsx! {
            div { class: "card p-6", aria_busy: "true", "Loading..." }
        }
    } else {
        match state.viewer() {
            Some(viewer) if viewer.role == Role::Customer => {
                let name = viewer.display_name().to_string();
                rsx! {
                    p { "Welcome back, {name}." }
                }
            }
            Some(viewer) => {
                let name = viewer.display_name().to_string();
                let dashboard = landing_path(viewer.role);
                rsx! {
                    div { class: "cta",
                        p { "Signed in as {name}." }
                        a { role: "button", href: dashboard, "Go to your dashboard" }
                    }
                }
            }
            None => rsx! {
                div { class: "cta",
                    a { role: "button", href: SIGN_IN_PATH, "Sign in" }
                    a { role: "button", class: "secondary", href: BECOME_VENDOR_PATH, "Become a vendor" }
                }
            },
        }
    };

    rsx! {
        Layout {
            title: "Home".to_string(),
            nav_active: "home".to_string(),

            section { class: "mb-6",
                h1 { "Everything for your event, in one place" }
                p { class: "text-muted",
                    "Find caterers, venues, photographers and more from vendors you can trust."
                }
            }

            section { id: "get-started",
                {call_to_action}
            }
        }
    }
}
