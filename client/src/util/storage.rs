//! Browser localStorage helpers for the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens and the signed-in email survive reloads through three string keys.
//! The HTTP layer reads the access token from here on every protected call
//! and clears all three keys on a 401, so storage is the source of truth and
//! the session signal mirrors it.

use crate::net::types::TokenPair;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_EMAIL_KEY: &str = "userEmail";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a raw string from `localStorage` for `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten().filter(|v| !v.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a raw string to `localStorage` for `key`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Stored tokens and email, if a full session is present.
pub fn load_session() -> Option<(TokenPair, Option<String>)> {
    let access = load_string(ACCESS_TOKEN_KEY)?;
    let refresh = load_string(REFRESH_TOKEN_KEY).unwrap_or_default();
    Some((TokenPair { access, refresh }, load_string(USER_EMAIL_KEY)))
}

pub fn save_session(tokens: &TokenPair, email: &str) {
    save_string(ACCESS_TOKEN_KEY, &tokens.access);
    save_string(REFRESH_TOKEN_KEY, &tokens.refresh);
    save_string(USER_EMAIL_KEY, email);
}

pub fn clear_session() {
    remove(ACCESS_TOKEN_KEY);
    remove(REFRESH_TOKEN_KEY);
    remove(USER_EMAIL_KEY);
}

pub fn stored_access_token() -> Option<String> {
    load_string(ACCESS_TOKEN_KEY)
}
