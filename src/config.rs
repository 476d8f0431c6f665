// src/config.rs

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_RANGE: &str = "Sheet1!A:P";
pub const DEFAULT_MAX_WORKERS: usize = 8;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Everything the server reads from its environment at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub client_email: String,
    pub private_key_pem: String,
    pub spreadsheet_id: String,
    pub range: String,
    pub sheets_timeout: Duration,
    pub maps_api_key: Option<String>,
    pub submit_endpoint: Option<Url>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("max_workers", &self.max_workers)
            .field("client_email", &self.client_email)
            .field("private_key_pem", &"<redacted>")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("range", &self.range)
            .field("sheets_timeout", &self.sheets_timeout)
            .field("maps_api_key", &self.maps_api_key.as_ref().map(|_| "<set>"))
            .field("submit_endpoint", &self.submit_endpoint)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any name -> value lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let bind_addr: SocketAddr = parse_or("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR.parse().ok())?;
        let max_workers: usize = parse_or("MAX_WORKERS", get("MAX_WORKERS"), Some(DEFAULT_MAX_WORKERS))?;
        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                name: "MAX_WORKERS",
                reason: "must be at least 1".into(),
            });
        }
        let timeout_secs: u64 =
            parse_or("SHEETS_TIMEOUT_SECS", get("SHEETS_TIMEOUT_SECS"), Some(DEFAULT_TIMEOUT_SECS))?;

        let submit_endpoint = match get("SUBMIT_ENDPOINT_URL") {
            Some(raw) => Some(Url::parse(&raw).map_err(|e| ConfigError::Invalid {
                name: "SUBMIT_ENDPOINT_URL",
                reason: e.to_string(),
            })?),
            None => None,
        };

        Ok(Self {
            bind_addr,
            max_workers,
            client_email: require("GOOGLE_CLIENT_EMAIL")?,
            private_key_pem: unescape_newlines(&require("GOOGLE_PRIVATE_KEY")?),
            spreadsheet_id: require("GOOGLE_SHEET_ID")?,
            range: get("GOOGLE_SHEET_RANGE").unwrap_or_else(|| DEFAULT_RANGE.to_string()),
            sheets_timeout: Duration::from_secs(timeout_secs),
            maps_api_key: get("GOOGLE_MAPS_API_KEY"),
            submit_endpoint,
        })
    }
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => default.ok_or(ConfigError::Missing(name)),
    }
}

/// Keys pasted into a single-line env var carry literal `\n` sequences.
fn unescape_newlines(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
