//! Session context shared by every guarded subtree.
//!
//! One [`SessionProvider`] at the app root runs the session check once per
//! mount and hands the result down through context. Guards on the same page
//! all read the same state, so there is a single `/api/auth/me` request no
//! matter how many of them render.
//!
//! Server renders have no viewer cookie to check with. They leave the state
//! `Unknown`, so guarded pages render their placeholder, and the browser
//! resolves the session after hydration.

use dioxus::prelude::*;
use market_types::Viewer;
use tracing::debug;

use crate::session::SessionState;

/// Whether this build resolves the session while rendering.
pub const CHECKS_SESSION: bool = cfg!(target_arch = "wasm32") || !cfg!(feature = "server");

/// Handle to the current session.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: Signal<SessionState>,
    generation: Signal<u64>,
}

impl SessionContext {
    pub(crate) fn new(state: Signal<SessionState>, generation: Signal<u64>) -> Self {
        Self { state, generation }
    }

    /// Current state (subscribes the caller to changes).
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    pub fn viewer(&self) -> Option<Viewer> {
        self.state.read().viewer().cloned()
    }

    /// Drop the resolved session and check again.
    ///
    /// Call after sign-in or sign-out; guards fall back to their loading
    /// placeholder until the new check finishes.
    pub fn invalidate(&mut self) {
        self.state.set(SessionState::Unknown);
        *self.generation.write() += 1;
    }
}

/// Read the session context provided by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Runs the session check and provides [`SessionContext`] to its children.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);
    let generation = use_signal(|| 0u64);

    // Restarting on a new generation cancels any check still in flight
    let _check = use_resource(move || {
        let generation = generation();
        async move {
            if !CHECKS_SESSION {
                debug!(generation, "Server render, leaving session unresolved");
                return;
            }
            let resolved = crate::app::api::check_session().await;
            debug!(generation, role = ?resolved.role(), "Session check finished");
            state.set(resolved);
        }
    });

    use_context_provider(|| SessionContext::new(state, generation));

    use_drop(|| debug!("Session context torn down"));

    rsx! {
        {children}
    }
}

#[cfg(all(test, feature = "server", not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    type Slot = Rc<RefCell<Option<SessionContext>>>;

    fn app() -> Element {
        rsx! {
            SessionProvider { Capture {} }
        }
    }

    #[component]
    fn Capture() -> Element {
        let session = use_session();
        let slot = use_context::<Slot>();
        slot.borrow_mut().replace(session);
        rsx! {}
    }

    #[tokio::test]
    async fn test_server_render_leaves_session_unknown() {
        assert!(!CHECKS_SESSION);

        let slot: Slot = Rc::new(RefCell::new(None));
        let mut dom = VirtualDom::new(app).with_root_context(slot.clone());
        dom.rebuild_in_place();

        for _ in 0..5 {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep(Duration::from_millis(50)) => {}
            }
            dom.render_immediate(&mut NoOpMutations);
        }

        let session = slot.borrow().unwrap();
        let state = dom.in_runtime(|| session.state.peek().clone());
        assert_eq!(state, SessionState::Unknown);
    }
}
