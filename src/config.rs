//! Application configuration.
//!
//! Defaults are overridden by environment variables, which are in turn
//! overridden by command-line flags (see [`crate::cli`]).
//!
//! | Variable | Default |
//! |----------|---------|
//! | `INFLIGHT_API_URL` | `https://jsonplaceholder.typicode.com` |
//! | `INFLIGHT_MAX_DELAY_MS` | `3000` |
//! | `INFLIGHT_TIMEOUT_SECS` | `30` |
//! | `INFLIGHT_LOG` | `info` |
//! | `INFLIGHT_LOG_FILE` | `<data dir>/inflight/inflight.log` |

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_API_URL;
use crate::error::{AppError, AppResult};
use crate::interceptor::DelayPolicy;

pub const ENV_API_URL: &str = "INFLIGHT_API_URL";
pub const ENV_MAX_DELAY_MS: &str = "INFLIGHT_MAX_DELAY_MS";
pub const ENV_TIMEOUT_SECS: &str = "INFLIGHT_TIMEOUT_SECS";
pub const ENV_LOG: &str = "INFLIGHT_LOG";
pub const ENV_LOG_FILE: &str = "INFLIGHT_LOG_FILE";

/// Default upper bound of the random response delay.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(3000);

/// Runtime configuration for the demo.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use inflight::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_url("http://localhost:3000")
///     .with_max_delay(Duration::ZERO);
/// assert_eq!(config.api_url, "http://localhost:3000");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the users API
    pub api_url: String,
    /// Upper bound of the artificial response delay (zero disables it)
    pub max_delay: Duration,
    /// Transport timeout per request
    pub request_timeout: Duration,
    /// UI tick interval (spinner animation)
    pub tick_rate: Duration,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Log file path; `None` picks the default location
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            max_delay: DEFAULT_MAX_DELAY,
            request_timeout: Duration::from_secs(30),
            tick_rate: Duration::from_millis(100),
            log_filter: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// The delay policy installed in front of the transport.
    pub fn delay_policy(&self) -> DelayPolicy {
        if self.max_delay.is_zero() {
            DelayPolicy::None
        } else {
            DelayPolicy::UpTo(self.max_delay)
        }
    }

    /// Build a config from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or empty keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config.api_url = url;
        }
        if let Some(raw) = get(ENV_MAX_DELAY_MS) {
            config.max_delay = Duration::from_millis(parse_number(ENV_MAX_DELAY_MS, &raw)?);
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = parse_number(ENV_TIMEOUT_SECS, &raw)?;
            if secs == 0 {
                return Err(AppError::config(ENV_TIMEOUT_SECS, "must be greater than zero"));
            }
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            config.log_file = Some(PathBuf::from(path));
        }

        config.validate()?;
        Ok(config)
    }

    /// Check settings that cannot be expressed in the field types.
    pub fn validate(&self) -> AppResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::config(
                ENV_API_URL,
                format!("'{}' is not an http(s) URL", self.api_url),
            ));
        }
        Ok(())
    }
}

pub(crate) fn parse_number(key: &str, raw: &str) -> AppResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| AppError::config(key, format!("'{}' is not a non-negative integer", raw)))
}
