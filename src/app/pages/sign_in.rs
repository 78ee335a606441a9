//! Sign-in page component.
//!
//! Guest-only: once the session check confirms a viewer, the guard sends
//! them to their role's landing page.

use dioxus::prelude::*;
use market_types::SignInRequest;
use tracing::{info, warn};

use crate::app::components::{GuestOnly, Layout};
use crate::app::session::use_session;
use crate::guard::routes::BECOME_VENDOR_PATH;
use crate::session::SessionError;

/// Sign-in page component.
#[component]
pub fn SignIn() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();

        let request = SignInRequest::new(email(), password());
        if let Err(problem) = request.validate() {
            error.set(Some(problem.to_string()));
            return;
        }

        submitting.set(true);
        match crate::app::api::sign_in(&request.normalized()).await {
            Ok(viewer) => {
                info!(role = %viewer.role, "Signed in");
                error.set(None);
                password.set(String::new());
                // Guard picks up the new session and redirects
                session.invalidate();
            }
            Err(e) => {
                warn!(error = %e, "Sign-in failed");
                error.set(Some(sign_in_error_message(&e).to_string()));
            }
        }
        submitting.set(false);
    };

    rsx! {
        Layout {
            title: "Sign in".to_string(),
            nav_active: "sign-in".to_string(),

            GuestOnly {
                article { class: "card p-6",
                    h1 { class: "mb-4", "Sign in" }

                    form { onsubmit,
                        label {
                            "Email"
                            input {
                                r#type: "email",
                                name: "email",
                                autocomplete: "email",
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                            }
                        }
                        label {
                            "Password"
                            input {
                                r#type: "password",
                                name: "password",
                                autocomplete: "current-password",
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                            }
                        }

                        if let Some(message) = error() {
                            p { class: "form-error", role: "alert", "{message}" }
                        }

                        button {
                            r#type: "submit",
                            disabled: submitting(),
                            aria_busy: "{submitting}",
                            if submitting() { "Signing in..." } else { "Sign in" }
                        }
                    }

                    p { class: "text-muted",
                        "Offering event services? "
                        a { href: BECOME_VENDOR_PATH, "Become a vendor" }
                    }
                }
            }
        }
    }
}

/// Message shown under the form for a failed sign-in.
fn sign_in_error_message(error: &SessionError) -> &'static str {
    match error {
        SessionError::NoSession => "Incorrect email or password.",
        SessionError::Status(422) => "Check your email and password and try again.",
        SessionError::Network(_) => "Could not reach the server. Try again.",
        SessionError::Status(_) | SessionError::Decode(_) => {
            "Sign-in is unavailable right now. Try again later."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_error_messages() {
        assert_eq!(
            sign_in_error_message(&SessionError::NoSession),
            "Incorrect email or password."
        );
        assert_eq!(
            sign_in_error_message(&SessionError::Status(422)),
            "Check your email and password and try again."
        );
        assert_eq!(
            sign_in_error_message(&SessionError::Status(502)),
            "Sign-in is unavailable right now. Try again later."
        );
        assert_eq!(
            sign_in_error_message(&SessionError::Network("refused".into())),
            "Could not reach the server. Try again."
        );
    }
}
