//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every request resolves to `Result<T, ApiError>`. The variants separate the
//! cases the UI reacts to differently: auth failures redirect to `/auth`,
//! HTTP failures carry the raw body so field errors can be shown next to the
//! input that caused them, transport and decode failures become a generic
//! toast.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("request failed with status {status}: {body}")]
    Http { status: u16, body: String },
    #[error("session expired")]
    SessionExpired,
    #[error("not signed in")]
    NotAuthenticated,
}

impl ApiError {
    /// Classify a non-2xx response.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 401 { Self::SessionExpired } else { Self::Http { status, body } }
    }

    /// Whether the caller should send the user to the login page.
    #[must_use]
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::SessionExpired | Self::NotAuthenticated)
    }

    /// First message for `field` in a DRF validation body
    /// (`{"email": ["Enter a valid email."]}`).
    #[must_use]
    pub fn field_message(&self, field: &str) -> Option<String> {
        let Self::Http { body, .. } = self else {
            return None;
        };
        let parsed: Value = serde_json::from_str(body).ok()?;
        first_message(parsed.get(field)?)
    }

    /// Best human-readable summary of the failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Network error, please try again".to_owned(),
            Self::Decode(_) => "Unexpected response from server".to_owned(),
            Self::SessionExpired => "Session expired, please sign in again".to_owned(),
            Self::NotAuthenticated => "Please sign in first".to_owned(),
            Self::Http { status, body } => body_summary(body).unwrap_or_else(|| format!("Request failed ({status})")),
        }
    }
}

fn body_summary(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    for key in ["detail", "non_field_errors", "error"] {
        if let Some(message) = parsed.get(key).and_then(first_message) {
            return Some(message);
        }
    }
    parsed.as_object()?.values().find_map(first_message)
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_message),
        _ => None,
    }
}
