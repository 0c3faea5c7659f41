//! Host configuration parsed from environment variables.
//!
//! Every setting has a default so a bare `cargo leptos watch` works against a
//! backend on `localhost:8000`. `main` loads `.env` first via `dotenvy`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid PROXY_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
    #[error("invalid API_ORIGIN: {0} (expected http:// or https://)")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub api_origin: String,
    pub proxy_timeout_secs: u64,
    pub cors_allow_any: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_origin: DEFAULT_API_ORIGIN.to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
            cors_allow_any: false,
        }
    }
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `API_ORIGIN`: backend REST origin, default `http://localhost:8000`
    /// - `PROXY_TIMEOUT_SECS`: upstream timeout, default 30
    /// - `CORS_ALLOW_ANY`: add a permissive CORS layer, default false
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with variables read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let api_origin = parse_origin(lookup("API_ORIGIN").as_deref())?;
        let proxy_timeout_secs = match lookup("PROXY_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_PROXY_TIMEOUT_SECS,
        };
        let cors_allow_any = lookup("CORS_ALLOW_ANY").as_deref().and_then(parse_bool).unwrap_or(false);

        Ok(Self { port, api_origin, proxy_timeout_secs, cors_allow_any })
    }
}

fn parse_origin(raw: Option<&str>) -> Result<String, ConfigError> {
    let origin = raw.map_or(DEFAULT_API_ORIGIN, str::trim).trim_end_matches('/');
    if origin.starts_with("http://") || origin.starts_with("https://") {
        Ok(origin.to_owned())
    } else {
        Err(ConfigError::InvalidOrigin(origin.to_owned()))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
