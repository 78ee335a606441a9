//! Shared UI components for the Dioxus fullstack web UI.

pub mod guard;
pub mod layout;
pub mod nav;

pub use guard::{GuestOnly, MemberOnly};
pub use layout::Layout;
pub use nav::Nav;
