use std::path::PathBuf;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Log line format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development next to
/// the React dev server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding avatar images (default: `media/avatars`).
    pub avatar_dir: PathBuf,
    /// User treated as the caller of every request (default: `user1`).
    pub current_user_id: String,
    /// Log output format (default: text).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `AVATAR_DIR`           | `media/avatars`            |
    /// | `CURRENT_USER_ID`      | `user1`                    |
    /// | `LOG_FORMAT`           | `text` (or `json`)         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var_or = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.into());

        let host = var_or("HOST", "0.0.0.0");

        let port_raw = var_or("PORT", "8000");
        let port: u16 = port_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "PORT",
            expected: "u16",
            value: port_raw.clone(),
        })?;

        let cors_origins: Vec<String> = var_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout_raw = var_or("REQUEST_TIMEOUT_SECS", "30");
        let request_timeout_secs: u64 = timeout_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "REQUEST_TIMEOUT_SECS",
            expected: "u64",
            value: timeout_raw.clone(),
        })?;

        let avatar_dir = PathBuf::from(var_or("AVATAR_DIR", "media/avatars"));
        let current_user_id = var_or("CURRENT_USER_ID", "user1");

        let format_raw = var_or("LOG_FORMAT", "text");
        let log_format = match format_raw.to_ascii_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            _ => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    expected: "log format (text or json)",
                    value: format_raw,
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            avatar_dir,
            current_user_id,
            log_format,
        })
    }
}
