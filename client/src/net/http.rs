//! Thin JSON-over-HTTP wrapper around `gloo-net`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Network` since the
//! storefront API is only called from the browser.
//!
//! DESIGN
//! ======
//! A request is first turned into a pure [`RequestPlan`] (absolute URL plus
//! optional bearer token), which is where the authorization policy and the
//! fail-fast "not signed in" check live. Only the plan is executed against
//! the network, so the policy is testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 from any endpoint wipes the stored session before surfacing
//! `ApiError::SessionExpired`. DELETE and empty (204) responses are never
//! parsed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::endpoints::{self, Method};
use super::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::util::storage;

/// Origin prepended to every API path. Empty means same-origin, i.e. the
/// host server's proxy.
#[must_use]
pub fn api_origin() -> &'static str {
    option_env!("STOREFRONT_API_ORIGIN").unwrap_or("")
}

/// Fully resolved request target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestPlan {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
}

impl RequestPlan {
    /// Whether the response body should be decoded for this method.
    #[must_use]
    pub fn expects_body(&self) -> bool {
        self.method != Method::Delete
    }
}

/// Resolve `endpoint` and decide whether `token` must be attached.
///
/// # Errors
///
/// Returns `ApiError::NotAuthenticated` when the route is protected and no
/// token is available. No request should be issued in that case.
pub fn plan(method: Method, endpoint: &str, token: Option<&str>) -> Result<RequestPlan, ApiError> {
    let url = endpoints::resolve_url(api_origin(), endpoint);
    let bearer = if endpoints::requires_auth(method, endpoint) {
        let token = token.filter(|t| !t.is_empty()).ok_or(ApiError::NotAuthenticated)?;
        Some(token.to_owned())
    } else {
        None
    };
    Ok(RequestPlan { method, url, bearer })
}

/// A non-2xx response, classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusFailure {
    pub error: ApiError,
    /// Stored tokens and email must be wiped before the error surfaces.
    pub clear_session: bool,
}

/// Classify a non-2xx response. Any 401 ends the stored session.
#[must_use]
pub fn status_failure(status: u16, body: String) -> StatusFailure {
    let error = ApiError::from_status(status, body);
    let clear_session = error == ApiError::SessionExpired;
    StatusFailure { error, clear_session }
}

/// Whether a successful response body should be read for `plan`.
#[must_use]
pub fn reads_body(plan: &RequestPlan, status: u16) -> bool {
    plan.expects_body() && status != 204
}

/// Decode a response body that the caller expects to be JSON.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is missing or malformed.
pub fn decode<T: DeserializeOwned>(body: Option<&str>) -> Result<T, ApiError> {
    let body = body.ok_or_else(|| ApiError::Decode("empty response".to_owned()))?;
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// PUBLIC CALLS
// =============================================================================

/// `GET` an endpoint (or an absolute pagination cursor) and decode it.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn get<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let body = execute(Method::Get, endpoint, None).await?;
    decode(body.as_deref())
}

/// Send `body` as JSON and decode the JSON response.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    endpoint: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = execute(method, endpoint, Some(encode(body)?)).await?;
    decode(response.as_deref())
}

/// Send `body` as JSON and ignore the response body.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn send_unit<B: Serialize>(method: Method, endpoint: &str, body: &B) -> Result<(), ApiError> {
    execute(method, endpoint, Some(encode(body)?)).await.map(|_| ())
}

/// `DELETE` an endpoint. The response body is never parsed.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete(endpoint: &str) -> Result<(), ApiError> {
    execute(Method::Delete, endpoint, None).await.map(|_| ())
}

/// `POST` a multipart form and decode the JSON response.
///
/// # Errors
///
/// See [`ApiError`].
#[cfg(feature = "hydrate")]
pub async fn upload<T: DeserializeOwned>(endpoint: &str, form: web_sys::FormData) -> Result<T, ApiError> {
    let plan = plan(Method::Post, endpoint, storage::stored_access_token().as_deref())?;
    let mut builder = gloo_net::http::Request::post(&plan.url);
    if let Some(token) = &plan.bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let request = builder.body(form).map_err(|e| ApiError::Network(e.to_string()))?;
    let body = finish(&plan, request).await?;
    decode(body.as_deref())
}

// =============================================================================
// EXECUTION
// =============================================================================

async fn execute(method: Method, endpoint: &str, body: Option<String>) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let plan = plan(method, endpoint, storage::stored_access_token().as_deref())?;
        let mut builder = match plan.method {
            Method::Get => gloo_net::http::Request::get(&plan.url),
            Method::Post => gloo_net::http::Request::post(&plan.url),
            Method::Put => gloo_net::http::Request::put(&plan.url),
            Method::Patch => gloo_net::http::Request::patch(&plan.url),
            Method::Delete => gloo_net::http::Request::delete(&plan.url),
        };
        if let Some(token) = &plan.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder.header("Content-Type", "application/json").body(json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        finish(&plan, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, endpoint, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn finish(plan: &RequestPlan, request: gloo_net::http::Request) -> Result<Option<String>, ApiError> {
    let resp = request.send().await.map_err(|e| {
        log::warn!("{} {} failed: {e}", plan.method.as_str(), plan.url);
        ApiError::Network(e.to_string())
    })?;
    let status = resp.status();
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        let failure = status_failure(status, body);
        if failure.clear_session {
            storage::clear_session();
        }
        log::warn!("{} {} -> {status}", plan.method.as_str(), plan.url);
        return Err(failure.error);
    }
    if !reads_body(plan, status) {
        return Ok(None);
    }
    let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(if text.trim().is_empty() { None } else { Some(text) })
}
