//! Reverse proxy for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks to `/api/v1/*` on this host; requests are replayed
//! against `API_ORIGIN` with the same method, path, query and body. Only the
//! headers the API cares about are forwarded, and the upstream status and
//! body come back unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures never reach the browser as a hung request: a timeout
//! becomes `504`, anything else `502`, both with a JSON `{"error": ...}` body.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

/// Request headers replayed upstream.
const FORWARDED_REQUEST_HEADERS: [header::HeaderName; 3] =
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("http client build failed: {0}")]
    ClientBuild(String),
    #[error("upstream request failed: {0}")]
    Upstream(String),
    #[error("upstream timed out")]
    Timeout,
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, %status, "proxy request failed");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Upstream URL for a request path (with query) on this host.
#[must_use]
pub fn upstream_url(origin: &str, path_and_query: &str) -> String {
    let origin = origin.trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{origin}{path_and_query}")
    } else {
        format!("{origin}/{path_and_query}")
    }
}

/// Subset of `headers` to replay upstream.
#[must_use]
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_REQUEST_HEADERS {
        if let Some(value) = headers.get(&name) {
            out.insert(name, value.clone());
        }
    }
    out
}

/// `ANY /api/v1/{*path}`: replay the request against the backend.
///
/// # Errors
///
/// Returns `ProxyError` when the backend cannot be reached.
pub async fn proxy_api(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.config.api_origin, path_and_query);
    tracing::debug!(%method, %url, "proxying");

    let mut request = state.http.request(method, &url).headers(forwarded_headers(&headers));
    if !body.is_empty() {
        request = request.body(body);
    }
    let upstream = request.send().await?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(value) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    Ok(response)
}

/// `GET` a backend path and decode it as JSON.
///
/// # Errors
///
/// Returns `ProxyError` for transport failures, non-2xx statuses and bodies
/// that are not JSON.
pub async fn fetch_json(state: &AppState, path: &str) -> Result<serde_json::Value, ProxyError> {
    let url = upstream_url(&state.config.api_origin, path);
    let response = state
        .http
        .get(&url)
        .header(header::ACCEPT, HeaderValue::from_static("application/json"))
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json().await?)
}
