//! Passwordless sign-in: request a one-time code by email, then confirm it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::state::session::{SessionState, looks_like_email, normalize_email};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Email,
    Code,
}

/// Message for a failed step, preferring the API's own text for `field`.
fn field_error(err: &ApiError, field: &str) -> String {
    err.field_message(field).unwrap_or_else(|| err.user_message())
}

/// Code input keeps digits only.
fn clean_code(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let step = RwSignal::new(Step::Email);
    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if session.with(|s| !s.loading && s.is_authenticated()) {
            navigate("/", leptos_router::NavigateOptions::default());
        }
    });

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = normalize_email(&email.get_untracked());
        if !looks_like_email(&email_value) {
            error.set(Some("Enter a valid email".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_login_code(&email_value).await {
                Ok(()) => {
                    email.set(email_value);
                    step.set(Step::Code);
                }
                Err(err) => {
                    log::warn!("login code request failed: {err}");
                    error.set(Some(field_error(&err, "email")));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email_value;
    };

    let on_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let code_value = code.get_untracked();
        if code_value.is_empty() {
            error.set(Some("Enter the code from the email".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::confirm_login_code(&email_value, &code_value).await {
                Ok(tokens) => {
                    crate::util::storage::save_session(&tokens, &email_value);
                    session.update(|s| s.sign_in(tokens, email_value));
                    crate::util::auth::refresh_profile(session).await;
                }
                Err(err) => {
                    log::warn!("login code rejected: {err}");
                    error.set(Some(field_error(&err, "otp")));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, code_value);
    };

    let back = move |_| {
        code.set(String::new());
        error.set(None);
        step.set(Step::Email);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                {move || match step.get() {
                    Step::Email => {
                        view! {
                            <form class="login-form" on:submit=on_request_code>
                                <p class="login-card__subtitle">"We will email you a one-time code"</p>
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    "Send code"
                                </button>
                            </form>
                        }
                            .into_any()
                    }
                    Step::Code => {
                        view! {
                            <form class="login-form" on:submit=on_confirm>
                                <p class="login-card__subtitle">"Code sent to " {move || email.get()}</p>
                                <input
                                    class="login-input login-input--code"
                                    type="text"
                                    inputmode="numeric"
                                    maxlength="6"
                                    placeholder="123456"
                                    prop:value=move || code.get()
                                    on:input=move |ev| code.set(clean_code(&event_target_value(&ev)))
                                />
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    "Sign in"
                                </button>
                                <button class="btn btn--link" type="button" on:click=back>
                                    "Use another email"
                                </button>
                            </form>
                        }
                            .into_any()
                    }
                }}
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
