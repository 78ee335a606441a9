//! Navigation bar with session-aware links.

use dioxus::prelude::*;
use market_types::Role;
use tracing::{info, warn};

use crate::app::session::use_session;
use crate::app::Route;
use crate::guard::landing_path;
use crate::guard::routes::{BECOME_VENDOR_PATH, HOME_PATH, SIGN_IN_PATH};

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "dashboard")
    pub active: String,
}

/// Navigation bar. Links depend on who is signed in.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut menu_open = use_signal(|| false);

    let nav_link_class = |page: &str| {
        if props.active == page {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let sign_out = move |_| async move {
        if let Err(e) = crate::app::api::sign_out().await {
            warn!(error = %e, "Sign-out request failed");
        }
        info!("Signed out");
        session.invalidate();
        let _ = nav.push(Route::Home {});
    };

    let state = session.state();
    let role = state.role();
    let dashboard = match role {
        Some(role @ (Role::Admin | Role::Vendor)) => Some(landing_path(role)),
        Some(Role::Customer) | None => None,
    };

    rsx! {
        nav {
            ul {
                li {
                    a { href: HOME_PATH, strong { "Event Market" } }
                }
            }
            ul {
                li {
                    button {
                        class: "outline secondary",
                        r#type: "button",
                        aria_expanded: "{menu_open}",
                        onclick: move |_| menu_open.toggle(),
                        "Menu"
                    }
                }
            }
            ul { hidden: !menu_open(),
                li { a { class: nav_link_class("home"), href: HOME_PATH, "Home" } }
                if let Some(path) = dashboard {
                    li { a { class: nav_link_class("dashboard"), href: path, "Dashboard" } }
                }
                if state.is_loading() {
                    li { span { aria_busy: "true" } }
                } else if role.is_some() {
                    li {
                        button { class: "secondary", r#type: "button", onclick: sign_out, "Sign out" }
                    }
                } else {
                    li { a { class: nav_link_class("become-vendor"), href: BECOME_VENDOR_PATH, "Become a vendor" } }
                    li { a { class: nav_link_class("sign-in"), href: SIGN_IN_PATH, "Sign in" } }
                }
            }
        }
    }
}
