//! Wire types shared between the marketplace web app and its backend.
//!
//! These mirror the DTOs exposed by the backend REST API. Only the
//! pieces the web app actually consumes are modelled here.
//!
//! # Modules
//! - [`viewer`] - Viewer identity and role
//! - [`envelope`] - Response envelopes (`{ data: ... }`)
//! - [`auth`] - Sign-in request and its validation

pub mod auth;
pub mod envelope;
pub mod viewer;

// Re-export commonly used types at crate root
pub use auth::{SignInRequest, SignInValidation};
pub use envelope::{ApiResponse, UserPayload};
pub use viewer::{Role, UnknownRole, Viewer};
