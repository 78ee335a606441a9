//! Redirect side effect for guarded pages.
//!
//! Navigation runs after the guard has rendered, and only while the guard
//! that asked for it is still mounted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

use super::Decision;

/// Liveness flag for one guard mount.
///
/// Clones share the flag. Call [`MountToken::end`] on unmount; afterwards
/// no redirect is issued on behalf of that mount.
#[derive(Debug, Clone)]
pub struct MountToken {
    live: Arc<AtomicBool>,
}

impl MountToken {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        self.live.store(false, Ordering::Release);
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that can move the viewer to another path.
pub trait Navigate {
    fn navigate(&mut self, path: &'static str);
}

impl<F: FnMut(&'static str)> Navigate for F {
    fn navigate(&mut self, path: &'static str) {
        self(path)
    }
}

/// Perform the navigation a decision calls for.
///
/// Returns `true` if navigation was issued.
pub fn apply_decision<N: Navigate>(decision: &Decision, token: &MountToken, mut nav: N) -> bool {
    let Decision::RedirectTo(path) = *decision else {
        return false;
    };
    if !token.is_live() {
        debug!(path, "Guard unmounted, dropping redirect");
        return false;
    }
    debug!(path, "Guard redirect");
    nav.navigate(path);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{evaluate, GuardMode};
    use crate::session::{resolve_session, SessionError, SessionState};
    use futures::channel::oneshot;
    use market_types::{Role, Viewer};

    #[test]
    fn test_redirect_issued_while_mounted() {
        let token = MountToken::new();
        let mut visited = Vec::new();

        let issued = apply_decision(&Decision::RedirectTo("/sign-in"), &token, |p: &'static str| {
            visited.push(p)
        });

        assert!(issued);
        assert_eq!(visited, vec!["/sign-in"]);
    }

    #[test]
    fn test_non_redirect_decisions_do_not_navigate() {
        let token = MountToken::new();
        let mut visited: Vec<&str> = Vec::new();

        let mut record = |p: &'static str| visited.push(p);

        assert!(!apply_decision(&Decision::RenderChildren, &token, &mut record));
        assert!(!apply_decision(&Decision::ShowLoadingPlaceholder, &token, &mut record));
        assert!(visited.is_empty());
    }

    #[test]
    fn test_clones_share_liveness() {
        let token = MountToken::new();
        let effect_copy = token.clone();
        assert!(effect_copy.is_live());

        token.end();
        assert!(!effect_copy.is_live());
    }

    #[test]
    fn test_unmount_before_session_resolves_issues_no_redirect() {
        let token = MountToken::new();
        let effect_token = token.clone();
        let (tx, rx) = oneshot::channel::<Result<Viewer, SessionError>>();
        let mut visited: Vec<&str> = Vec::new();

        let guard_run = async {
            let mut pending = Some(rx);
            let state = resolve_session(0, || {
                let rx = pending.take();
                async move {
                    match rx {
                        Some(rx) => rx.await.unwrap_or(Err(SessionError::Network("dropped".into()))),
                        None => Err(SessionError::Network("no receiver".into())),
                    }
                }
            })
            .await;
            let decision = evaluate(&state, &GuardMode::member_only([Role::Admin]));
            apply_decision(&decision, &effect_token, |p: &'static str| visited.push(p))
        };

        // Unmount while the check is still outstanding, then let it resolve.
        token.end();
        tx.send(Err(SessionError::NoSession)).unwrap();

        let issued = tokio_test::block_on(guard_run);
        assert!(!issued);
        assert!(visited.is_empty());
    }

    #[test]
    fn test_resolved_session_redirects_when_still_mounted() {
        let token = MountToken::new();
        let mut visited: Vec<&str> = Vec::new();

        let state = SessionState::Authenticated(Viewer::new("v-2", Role::Vendor));
        let decision = evaluate(&state, &GuardMode::GuestOnly);
        apply_decision(&decision, &token, |p: &'static str| visited.push(p));

        assert_eq!(visited, vec!["/vendor/dashboard"]);
    }
}
