//! Session state and resolution.
//!
//! The session is resolved once per application mount. Every failure mode
//! collapses into [`SessionState::Unauthenticated`]: a viewer whose session
//! cannot be confirmed is treated as signed out.

use market_types::{Role, Viewer};
use std::future::Future;
use tracing::{debug, warn};

/// Retry budget for the session check ("retry once").
pub const DEFAULT_SESSION_RETRIES: u32 = 1;

/// Resolved (or pending) authentication state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Session check still in flight
    #[default]
    Unknown,
    /// Backend confirmed a signed-in viewer
    Authenticated(Viewer),
    /// No session, or the check failed
    Unauthenticated,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }

    pub fn viewer(&self) -> Option<&Viewer> {
        match self {
            SessionState::Authenticated(viewer) => Some(viewer),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.viewer().map(|v| v.role)
    }
}

/// Why a session check did not produce a viewer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Backend says there is no session (401/403)
    #[error("no active session")]
    NoSession,
    /// Any other non-2xx response
    #[error("unexpected status {0}")]
    Status(u16),
    /// Request never completed
    #[error("network error: {0}")]
    Network(String),
    /// Response body was not a viewer
    #[error("invalid response: {0}")]
    Decode(String),
}

impl SessionError {
    /// Map an HTTP status to the matching error.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => SessionError::NoSession,
            other => SessionError::Status(other),
        }
    }

    /// A definitive "not signed in" answer is not worth repeating.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, SessionError::NoSession)
    }
}

/// Run the session check, retrying transient failures up to `retries` times.
///
/// Never fails: errors resolve to [`SessionState::Unauthenticated`].
pub async fn resolve_session<F, Fut>(retries: u32, mut fetch: F) -> SessionState
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Viewer, SessionError>>,
{
    let mut attempt = 0;
    loop {
        match fetch().await {
            Ok(viewer) => {
                debug!(role = %viewer.role, "Session resolved");
                return SessionState::Authenticated(viewer);
            }
            Err(SessionError::NoSession) => {
                debug!("No active session");
                return SessionState::Unauthenticated;
            }
            Err(e) if e.is_retryable() && attempt < retries => {
                attempt += 1;
                debug!(attempt, error = %e, "Session check failed, retrying");
            }
            Err(e) => {
                warn!(error = %e, "Session check failed, treating viewer as signed out");
                return SessionState::Unauthenticated;
            }
        }
    }
}
