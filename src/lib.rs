//! Event Market web application
//!
//! A server-rendered marketplace for event services.
//!
//! This library provides:
//! - Session/role guard deciding render-vs-redirect for each page
//! - Session resolution that fails closed on any backend error
//! - Same-origin proxy for the auth backend (`/api/auth/*`)
//! - Web UI (Dioxus fullstack with client hydration)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Guard and session logic (shared, no UI dependencies)
pub mod guard;
pub mod session;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod backend;
#[cfg(feature = "server")]
pub mod config;
