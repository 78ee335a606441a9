//! Route guard components.
//!
//! `GuestOnly` wraps pages for signed-out viewers, `MemberOnly` wraps pages
//! for particular roles. Both show a placeholder until the session resolves
//! and never render their children while a redirect is pending.

use dioxus::prelude::*;
use market_types::Role;
use tracing::warn;

use crate::app::session::use_session;
use crate::app::Route;
use crate::guard::{apply_decision, evaluate, Decision, GuardMode, MountToken};

/// Render children only for signed-out viewers.
#[component]
pub fn GuestOnly(children: Element) -> Element {
    rsx! {
        Guarded { mode: GuardMode::GuestOnly, {children} }
    }
}

/// Render children only for signed-in viewers holding one of `allowed`.
#[component]
pub fn MemberOnly(allowed: Vec<Role>, children: Element) -> Element {
    rsx! {
        Guarded { mode: GuardMode::member_only(allowed), {children} }
    }
}

#[component]
fn Guarded(mode: GuardMode, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    let token = use_hook(MountToken::new);
    let drop_token = token.clone();
    use_drop(move || drop_token.end());

    // Redirect after render, re-run whenever the session changes
    let effect_mode = mode.clone();
    use_effect(move || {
        let decision = evaluate(&session.state(), &effect_mode);
        apply_decision(&decision, &token, |path: &'static str| {
            match path.parse::<Route>() {
                Ok(route) => {
                    let _ = nav.replace(route);
                }
                Err(_) => warn!(path, "Redirect target is not an app route"),
            }
        });
    });

    match evaluate(&session.state(), &mode) {
        Decision::RenderChildren => rsx! {
            {children}
        },
        Decision::ShowLoadingPlaceholder | Decision::RedirectTo(_) => rsx! {
            LoadingPlaceholder {}
        },
    }
}

#[component]
fn LoadingPlaceholder() -> Element {
    rsx! {
        div { class: "card p-6", aria_busy: "true", "Checking your session..." }
    }
}
