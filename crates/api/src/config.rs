use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use brandhub_core::filter::DEFAULT_UNFILTERED_CAP;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `6969`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Artificial delay applied to every request, in milliseconds (default: `500`).
    pub response_delay_ms: u64,
    /// Brands reachable through an unfiltered, unsearched `GET /brand` (default: `50`).
    pub unfiltered_list_cap: usize,
    /// JSON data file to seed from and write through to. In-memory only when `None`.
    pub data_file: Option<PathBuf>,
    /// Template PDF served at `GET /pdf`.
    pub pdf_path: PathBuf,
    /// Value stamped into `created_by` on new projects and events.
    pub created_by: String,
}

/// A configuration variable that is present but cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{key} has invalid value {value:?}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `6969`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `RESPONSE_DELAY_MS`    | `500`                      |
    /// | `UNFILTERED_LIST_CAP`  | `50`                       |
    /// | `DATA_FILE`            | unset                      |
    /// | `PDF_PATH`             | `public/template.pdf`      |
    /// | `CREATED_BY`           | `user_12`                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let cors_origins = string("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host: string("HOST", "0.0.0.0"),
            port: parse(&lookup, "PORT", 6969)?,
            cors_origins,
            request_timeout_secs: parse(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            response_delay_ms: parse(&lookup, "RESPONSE_DELAY_MS", 500)?,
            unfiltered_list_cap: parse(&lookup, "UNFILTERED_LIST_CAP", DEFAULT_UNFILTERED_CAP)?,
            data_file: lookup("DATA_FILE")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            pdf_path: PathBuf::from(string("PDF_PATH", "public/template.pdf")),
            created_by: string("CREATED_BY", "user_12"),
        })
    }

    /// The artificial per-request delay.
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
