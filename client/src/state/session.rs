//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One session holder serves every page: route guards, the header links, the
//! basket, checkout and the admin gate all read this struct from context.
//! It mirrors the tokens persisted by `util::storage`; the profile (email +
//! staff flag) comes from `auth/info` after sign-in or on startup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{TokenPair, UserInfo};

/// Authentication state tracking tokens, profile and loading status.
///
/// `loading` is true from startup until stored tokens have been checked, so
/// guards do not redirect before the session is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub tokens: Option<TokenPair>,
    pub email: Option<String>,
    pub profile: Option<UserInfo>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { tokens: None, email: None, profile: None, loading: true }
    }
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_some()
    }

    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.staff)
    }

    /// Adopt tokens found in storage at startup. Stays `loading` until the
    /// profile check finishes.
    pub fn restore(&mut self, stored: Option<(TokenPair, Option<String>)>) {
        match stored {
            Some((tokens, email)) => {
                self.tokens = Some(tokens);
                self.email = email;
                self.loading = true;
            }
            None => self.expire(),
        }
    }

    /// Record a fresh sign-in. The profile is fetched separately.
    pub fn sign_in(&mut self, tokens: TokenPair, email: String) {
        self.tokens = Some(tokens);
        self.email = Some(email);
        self.profile = None;
        self.loading = true;
    }

    pub fn set_profile(&mut self, profile: UserInfo) {
        self.email = Some(profile.email.clone());
        self.profile = Some(profile);
        self.loading = false;
    }

    /// Profile lookup failed for a reason other than expiry; keep the
    /// tokens so ordinary pages still work.
    pub fn profile_unavailable(&mut self) {
        self.loading = false;
    }

    /// Drop everything. Used on logout and on a 401.
    pub fn expire(&mut self) {
        self.tokens = None;
        self.email = None;
        self.profile = None;
        self.loading = false;
    }

    #[must_use]
    pub fn display_email(&self) -> &str {
        self.profile.as_ref().map(|p| p.email.as_str()).or(self.email.as_deref()).unwrap_or_default()
    }
}

/// Emails are compared and sent in trimmed lower case.
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Loose shape check before hitting `auth/login/`; the API is the authority.
#[must_use]
pub fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Whether a protected page should send the visitor to `/auth`.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Whether the session was just lost (a 401 or a logout) after having been
/// signed in. `previous` is `None` on the first observation.
#[must_use]
pub fn session_lost(previous: Option<bool>, now_authenticated: bool) -> bool {
    previous == Some(true) && !now_authenticated
}

/// Outcome of the admin route gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminAccess {
    Pending,
    Anonymous,
    Denied,
    Granted,
}

#[must_use]
pub fn admin_access(state: &SessionState) -> AdminAccess {
    if state.loading {
        AdminAccess::Pending
    } else if !state.is_authenticated() {
        AdminAccess::Anonymous
    } else if state.is_staff() {
        AdminAccess::Granted
    } else {
        AdminAccess::Denied
    }
}
