use std::time::Duration;

/// Olografix HQ status endpoint.
pub const STATUS_URL: &str = "https://sede.olografix.org/status";

/// User agent sent with every status request.
pub const USER_AGENT: &str = "sede-mcp-server/1.0";

/// Accept header sent with every status request.
pub const ACCEPT: &str = "application/text";

/// Default timeout for the status request (30 seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SEDE_STATUS_URL must not be empty")]
    EmptyStatusUrl,
    #[error("SEDE_REQUEST_TIMEOUT_SECS must be a positive integer")]
    InvalidTimeout,
}

/// Server configuration.
///
/// The defaults are the production values; the environment can only
/// override them.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub status_url: String,
    pub user_agent: String,
    pub accept: String,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            status_url: STATUS_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            accept: ACCEPT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `SEDE_STATUS_URL` (optional) — status endpoint
    /// - `SEDE_REQUEST_TIMEOUT_SECS` (optional, default 30) — max seconds per status request
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("SEDE_STATUS_URL") {
            if url.trim().is_empty() {
                return Err(ConfigError::EmptyStatusUrl);
            }
            config.status_url = url;
        }

        if let Some(val) = lookup("SEDE_REQUEST_TIMEOUT_SECS") {
            let secs = val
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout)?;
            if secs == 0 {
                return Err(ConfigError::InvalidTimeout);
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
