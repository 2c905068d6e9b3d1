use std::env;
use std::time::Duration;

/// How long the rate fetch may take before the widget falls back.
pub const DEFAULT_RATES_TIMEOUT: Duration = Duration::from_secs(6);

/// Where native builds look for the exchange endpoints when nothing is configured.
pub const NATIVE_BASE_URL: &str = "http://127.0.0.1:5000";

pub const DEFAULT_CREDIT: &str = "© Ziyad — All rights reserved";

/// Settings for talking to the exchange endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme + host (+ optional path prefix) the `/api/...` paths hang off.
    pub base_url: String,
    pub rates_timeout: Duration,
    /// Fixed credit line shown under the widget.
    pub credit: String,
}

impl ClientConfig {
    /// Reads the config from environment variables, falling back to
    /// [`NATIVE_BASE_URL`] when no base URL is set.
    ///
    /// # Environment Variables
    /// - `FX_API_BASE_URL`: base URL of the exchange endpoints.
    /// - `FX_RATES_TIMEOUT_MS`: rate fetch timeout in milliseconds; `0` or
    ///   garbage keeps the default of 6000.
    /// - `FX_CREDIT`: credit line text.
    pub fn from_env() -> Self {
        Self::from_env_with_default_base(NATIVE_BASE_URL)
    }

    /// Like [`ClientConfig::from_env`], but with a caller-chosen default base
    /// URL (the page origin, in the browser).
    pub fn from_env_with_default_base(default_base: &str) -> Self {
        Self::from_lookup(|key| env::var(key).ok(), default_base)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, default_base: &str) -> Self {
        let base_url = lookup("FX_API_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| default_base.to_string());

        let rates_timeout = lookup("FX_RATES_TIMEOUT_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_RATES_TIMEOUT);

        let credit = lookup("FX_CREDIT")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CREDIT.to_string());

        Self {
            base_url,
            rates_timeout,
            credit,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
