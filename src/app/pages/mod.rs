//! Dioxus fullstack page components.

mod become_vendor;
mod dashboard;
mod home;
mod not_found;
mod sign_in;

pub use become_vendor::BecomeVendor;
pub use dashboard::{AdminDashboard, VendorDashboard};
pub use home::Home;
pub use not_found::NotFound;
pub use sign_in::SignIn;
