//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated redirect behavior, and
//! every failed API call funnels through [`report_api_error`]. A 401 anywhere
//! expires the session and shows one toast; [`install_expiry_redirect`] then
//! moves to `/auth` through the router so the toast survives.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::notify::Notifier;
use super::storage;
use crate::net::error::ApiError;
use crate::state::session::{SessionState, session_lost, should_redirect_unauth};

pub const LOGIN_PATH: &str = "/auth";

/// Redirect to `/auth` whenever the session has loaded and nobody is signed in.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Router navigation to `/auth` once a signed-in session ends. Installed
/// once, inside the router, for the whole app.
pub fn install_expiry_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let authenticated = Memo::new(move |_| session.with(SessionState::is_authenticated));
    Effect::new(move |previous: Option<bool>| {
        let now = authenticated.get();
        if session_lost(previous, now) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
        now
    });
}

/// Full-page navigation, usable from async tasks.
pub fn redirect_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Drop the session locally and in storage.
pub fn sign_out(session: RwSignal<SessionState>) {
    storage::clear_session();
    session.update(SessionState::expire);
}

/// Validate the stored tokens against `auth/info` and record the profile.
/// A 401 ends the session; other failures keep the tokens.
pub async fn refresh_profile(session: RwSignal<SessionState>) {
    match crate::net::api::fetch_user_info().await {
        Ok(info) => session.update(|s| s.set_profile(info)),
        Err(err) if err.requires_login() => sign_out(session),
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("profile unavailable: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = err;
            session.update(SessionState::profile_unavailable);
        }
    }
}

/// Toast text for a failed `action`.
#[must_use]
pub fn error_text(action: &str, err: &ApiError) -> String {
    if err.requires_login() { err.user_message() } else { format!("{action}: {}", err.user_message()) }
}

/// Surface a failed call. Auth failures end the session, which triggers
/// the app-wide expiry redirect.
pub fn report_api_error(err: &ApiError, action: &str, session: RwSignal<SessionState>, notifier: Notifier) {
    #[cfg(feature = "hydrate")]
    log::warn!("{action}: {err}");
    notifier.error(error_text(action, err));
    if err.requires_login() {
        sign_out(session);
    }
}
