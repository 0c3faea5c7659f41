//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no data of its own: it holds the parsed config and one pooled
//! `reqwest` client for talking to the backend API.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::proxy::ProxyError;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Clone is required by Axum; both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns `ProxyError::ClientBuild` if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(config.proxy_timeout_secs)))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// State pointing at `origin`, with a short timeout.
    #[must_use]
    pub fn test_app_state(origin: &str) -> AppState {
        let config = Config { api_origin: origin.to_owned(), proxy_timeout_secs: 2, ..Config::default() };
        AppState::new(config).expect("test client should build")
    }
}
