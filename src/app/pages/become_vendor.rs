//! Become-a-vendor page component.

use dioxus::prelude::*;

use crate::app::components::{GuestOnly, Layout};
use crate::guard::routes::SIGN_IN_PATH;

/// Vendor onboarding page; only shown to signed-out viewers.
#[component]
pub fn BecomeVendor() -> Element {
    rsx! {
        Layout {
            title: "Become a vendor".to_string(),
            nav_active: "become-vendor".to_string(),

            GuestOnly {
                article { class: "card p-6",
                    h1 { class: "mb-4", "Become a vendor" }
                    p {
                        "List your event services in front of people planning weddings, "
                        "conferences and parties."
                    }
                    ul {
                        li { "Pick a plan that fits your business" }
                        li { "Publish services under the right categories" }
                        li { "Manage everything from your vendor dashboard" }
                    }
                    p { class: "text-muted",
                        "Already registered? "
                        a { href: SIGN_IN_PATH, "Sign in" }
                    }
                }
            }
        }
    }
}
