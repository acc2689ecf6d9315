//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use common::BookmarkId;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `API_TOKEN` is unset or empty.
    #[error("API_TOKEN must be set to a non-empty value")]
    MissingApiToken,
}

/// Deployment environment, selected by `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    /// Parses a `NODE_ENV` value. Unknown or missing values mean development.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") => Self::Production,
            Some(v) if v.eq_ignore_ascii_case("test") => Self::Test,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Tracing filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Self::Production => "info",
            Self::Development | Self::Test => {
                "info,api=debug,domain=debug,bookmark_store=debug,tower_http=debug"
            }
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        };
        f.write_str(name)
    }
}

/// Server configuration.
///
/// Reads from environment variables:
/// - `API_TOKEN`: shared bearer token (required)
/// - `NODE_ENV`: `production`, `development` or `test` (default: development)
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `8000`)
/// - `PUBLIC_URL`: base for `Location` headers (default: `http://localhost:{PORT}`)
/// - `RUST_LOG`: tracing filter directive (default depends on `NODE_ENV`)
/// - `LOG_FILE`: JSON log file path (default: `info.log`, empty disables it)
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_token: String,
    pub environment: Environment,
    pub public_url: String,
    pub log_filter: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub const DEFAULT_PORT: u16 = 8000;
    pub const DEFAULT_LOG_FILE: &'static str = "info.log";

    /// Creates a configuration with defaults and the given token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: Self::DEFAULT_PORT,
            api_token: api_token.into(),
            environment: Environment::default(),
            public_url: format!("http://localhost:{}", Self::DEFAULT_PORT),
            log_filter: None,
            log_file: Some(PathBuf::from(Self::DEFAULT_LOG_FILE)),
        }
    }

    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = lookup("API_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingApiToken)?;

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);

        let public_url = lookup("PUBLIC_URL")
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://localhost:{port}"));

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            api_token,
            environment: Environment::from_node_env(lookup("NODE_ENV").as_deref()),
            public_url,
            log_filter: lookup("RUST_LOG"),
            log_file: match lookup("LOG_FILE") {
                Some(path) if path.trim().is_empty() => None,
                Some(path) => Some(PathBuf::from(path)),
                None => Some(PathBuf::from(Self::DEFAULT_LOG_FILE)),
            },
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the absolute URL of a bookmark, used as a `Location` header.
    pub fn bookmark_location(&self, id: &BookmarkId) -> String {
        format!("{}/bookmarks/{}", self.public_url, id)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_token", &"<redacted>")
            .field("environment", &self.environment)
            .field("public_url", &self.public_url)
            .field("log_filter", &self.log_filter)
            .field("log_file", &self.log_file)
            .finish()
    }
}
