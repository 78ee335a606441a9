//! Admin and vendor dashboard pages.
//!
//! Both are role-gated; the summary card reads the viewer from the shared
//! session context.

use dioxus::prelude::*;
use market_types::{Role, Viewer};

use crate::app::components::{Layout, MemberOnly};
use crate::app::session::use_session;

/// Admin dashboard page component.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        Layout {
            title: "Admin Dashboard".to_string(),
            nav_active: "dashboard".to_string(),

            MemberOnly { allowed: vec![Role::Admin],
                DashboardBody {
                    heading: "Admin Dashboard",
                    sections: vec![
                        ("Categories", "Organise the service categories customers browse."),
                        ("Plans", "Define the subscription plans vendors can choose."),
                        ("Features", "Manage the features bundled into each plan."),
                    ],
                }
            }
        }
    }
}

/// Vendor dashboard page component.
#[component]
pub fn VendorDashboard() -> Element {
    rsx! {
        Layout {
            title: "Vendor Dashboard".to_string(),
            nav_active: "dashboard".to_string(),

            MemberOnly { allowed: vec![Role::Vendor],
                DashboardBody {
                    heading: "Vendor Dashboard",
                    sections: vec![
                        ("Services", "List the event services you offer."),
                        ("Plan", "Review your current marketplace plan."),
                    ],
                }
            }
        }
    }
}

#[component]
fn DashboardBody(heading: &'static str, sections: Vec<(&'static str, &'static str)>) -> Element {
    let session = use_session();

    // Guarded, so a viewer is always present here; stay quiet if not
    let Some(viewer) = session.viewer() else {
        return rsx! {};
    };

    rsx! {
        h1 { class: "mb-6", "{heading}" }

        section { id: "account", class: "mb-6",
            AccountCard { viewer }
        }

        section { id: "overview",
            div { class: "dashboard-grid",
                for (title, blurb) in sections {
                    article { key: "{title}", class: "card p-6",
                        h3 { "{title}" }
                        p { class: "text-muted", "{blurb}" }
                    }
                }
            }
        }
    }
}

#[component]
fn AccountCard(viewer: Viewer) -> Element {
    let name = viewer.display_name().to_string();

    rsx! {
        div { class: "card p-6",
            p { span { strong { "Signed in as:" } } " {name}" }
            p { span { strong { "Role:" } } " {viewer.role}" }
            if let Some(email) = &viewer.email {
                p { span { strong { "Email:" } } " {email}" }
            }
        }
    }
}
