//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod pages;
pub mod session;

use pages::{AdminDashboard, BecomeVendor, Home, NotFound, SignIn, VendorDashboard};
use session::SessionProvider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Session context lives at the root so every guard shares one check
    rsx! {
        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/sign-in")]
    SignIn {},
    #[route("/become-vendor")]
    BecomeVendor {},
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/vendor/dashboard")]
    VendorDashboard {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::landing_path;
    use crate::guard::routes::{BECOME_VENDOR_PATH, SIGN_IN_PATH};
    use market_types::Role;

    #[test]
    fn test_landing_paths_are_app_routes() {
        assert_eq!(landing_path(Role::Admin).parse::<Route>().ok(), Some(Route::AdminDashboard {}));
        assert_eq!(landing_path(Role::Vendor).parse::<Route>().ok(), Some(Route::VendorDashboard {}));
        assert_eq!(landing_path(Role::Customer).parse::<Route>().ok(), Some(Route::Home {}));
    }

    #[test]
    fn test_guest_paths_are_app_routes() {
        assert_eq!(SIGN_IN_PATH.parse::<Route>().ok(), Some(Route::SignIn {}));
        assert_eq!(BECOME_VENDOR_PATH.parse::<Route>().ok(), Some(Route::BecomeVendor {}));
    }

    #[test]
    fn test_route_display_matches_paths() {
        assert_eq!(Route::AdminDashboard {}.to_string(), "/admin/dashboard");
        assert_eq!(Route::SignIn {}.to_string(), "/sign-in");
    }
}
