use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::{RetryPolicy, DEFAULT_RETRYABLE_STATUS_CODES};

/// Printed in place of session tokens in `Debug` output.
pub(crate) const REDACTED: &str = "<redacted>";

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt (0 = single attempt).
    pub max_retries: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: f64,
    /// HTTP status codes treated as transient.
    #[serde(default = "default_retryable_status_codes")]
    pub retryable_status_codes: Vec<u16>,
}

fn default_retryable_status_codes() -> Vec<u16> {
    DEFAULT_RETRYABLE_STATUS_CODES.to_vec()
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_secs: 1.0,
            max_delay_secs: 10.0,
            retryable_status_codes: default_retryable_status_codes(),
        }
    }
}

impl RetryConfig {
    /// Convert to a policy, rejecting zero, negative or non-finite delays.
    pub fn to_policy(&self) -> Result<RetryPolicy> {
        let base = Duration::try_from_secs_f64(self.base_delay_secs)
            .with_context(|| format!("invalid retry.base_delay_secs: {}", self.base_delay_secs))?;
        let max = Duration::try_from_secs_f64(self.max_delay_secs)
            .with_context(|| format!("invalid retry.max_delay_secs: {}", self.max_delay_secs))?;
        if base.is_zero() {
            anyhow::bail!("retry.base_delay_secs must be positive");
        }
        if base > max {
            tracing::warn!(
                "retry.base_delay_secs ({}) exceeds retry.max_delay_secs ({}); every delay will be capped",
                self.base_delay_secs,
                self.max_delay_secs
            );
        }
        Ok(RetryPolicy::new(self.max_retries, base, max)
            .with_retryable_status_codes(self.retryable_status_codes.iter().copied()))
    }
}

/// Client configuration loaded from `~/.config/waiaas/config.toml`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Daemon base URL.
    pub base_url: String,
    /// Session token (`wai_sess_...`); usually supplied per invocation instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("session_token", &self.session_token.as_ref().map(|_| REDACTED))
            .field("timeout_secs", &self.timeout_secs)
            .field("retry", &self.retry)
            .finish()
    }
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3100".to_string(),
            session_token: None,
            timeout_secs: default_timeout_secs(),
            retry: None,
        }
    }
}

impl ClientConfig {
    /// Retry policy from the `[retry]` section, or the defaults.
    pub fn retry_policy(&self) -> Result<RetryPolicy> {
        match &self.retry {
            Some(retry) => retry.to_policy(),
            None => Ok(RetryPolicy::default()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("waiaas")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClientConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ClientConfig> {
    if !path.exists() {
        let default_cfg = ClientConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: ClientConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}
