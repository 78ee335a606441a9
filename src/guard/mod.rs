//! Session/role guard.
//!
//! Decides, for a page mount, whether to render the page, show a loading
//! placeholder, or send the viewer somewhere else. The decision itself is a
//! pure function of the session state and the guard mode; performing the
//! redirect lives in [`effect`].

pub mod effect;
pub mod routes;

use market_types::Role;

use crate::session::SessionState;

pub use effect::{apply_decision, MountToken, Navigate};
pub use routes::{landing_path, SIGN_IN_PATH};

/// Who a guarded page is meant for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardMode {
    /// Signed-out viewers only (sign-in, become-vendor)
    GuestOnly,
    /// Signed-in viewers holding one of the allowed roles (dashboards)
    MemberOnly { allowed: Vec<Role> },
}

impl GuardMode {
    pub fn member_only(allowed: impl IntoIterator<Item = Role>) -> Self {
        GuardMode::MemberOnly {
            allowed: allowed.into_iter().collect(),
        }
    }
}

/// Outcome of evaluating a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    ShowLoadingPlaceholder,
    RedirectTo(&'static str),
    RenderChildren,
}

/// Decide what a guarded page should do for the current session.
pub fn evaluate(state: &SessionState, mode: &GuardMode) -> Decision {
    match (state, mode) {
        (SessionState::Unknown, _) => Decision::ShowLoadingPlaceholder,

        (SessionState::Unauthenticated, GuardMode::GuestOnly) => Decision::RenderChildren,
        (SessionState::Authenticated(viewer), GuardMode::GuestOnly) => {
            Decision::RedirectTo(landing_path(viewer.role))
        }

        (SessionState::Unauthenticated, GuardMode::MemberOnly { .. }) => {
            Decision::RedirectTo(SIGN_IN_PATH)
        }
        (SessionState::Authenticated(viewer), GuardMode::MemberOnly { allowed }) => {
            if allowed.contains(&viewer.role) {
                Decision::RenderChildren
            } else {
                Decision::RedirectTo(landing_path(viewer.role))
            }
        }
    }
}
