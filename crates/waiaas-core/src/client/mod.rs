//! Async client for the WAIaaS daemon REST API.
//!
//! Every call goes through [`retry::execute`] with the client's
//! [`RetryPolicy`]. Endpoint groups live in their own files:
//! wallet, transactions, session, utils, x402, walletconnect.

mod session;
mod transactions;
mod utils;
mod wallet;
mod walletconnect;
mod x402;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use url::Url;

use crate::config::{ClientConfig, REDACTED};
use crate::error::{ApiError, WaiaasError};
use crate::retry::{self, RetryPolicy};

pub use transactions::DEFAULT_PAGE_SIZE;

/// Per-request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client bound to one daemon and one session token.
///
/// Cheap to share by reference across tasks; the session token can be
/// swapped through a shared reference (see [`WaiaasClient::set_session_token`]).
///
/// ```no_run
/// # async fn demo() -> Result<(), waiaas_core::WaiaasError> {
/// let client = waiaas_core::WaiaasClient::new("http://localhost:3100", "wai_sess_xxx")?;
/// let balance = client.get_balance(None).await?;
/// println!("{} {}", balance.balance, balance.symbol);
/// # Ok(())
/// # }
/// ```
pub struct WaiaasClient {
    base_url: String,
    session_token: RwLock<String>,
    retry_policy: RetryPolicy,
    http: reqwest::Client,
}

/// Builder for [`WaiaasClient`].
pub struct ClientBuilder {
    base_url: String,
    session_token: String,
    retry_policy: RetryPolicy,
    timeout: Duration,
    http: Option<reqwest::Client>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("session_token", &REDACTED)
            .field("retry_policy", &self.retry_policy)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ClientBuilder {
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Per-attempt timeout. Ignored when [`http_client`](Self::http_client) is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, ...).
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<WaiaasClient, WaiaasError> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().timeout(self.timeout).build()?,
        };
        Ok(WaiaasClient {
            base_url,
            session_token: RwLock::new(self.session_token),
            retry_policy: self.retry_policy,
            http,
        })
    }
}

impl fmt::Debug for WaiaasClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaiaasClient")
            .field("base_url", &self.base_url)
            .field("session_token", &REDACTED)
            .field("retry_policy", &self.retry_policy)
            .finish_non_exhaustive()
    }
}

impl WaiaasClient {
    /// Client with the default retry policy and timeout.
    pub fn new(base_url: &str, session_token: &str) -> Result<Self, WaiaasError> {
        Self::builder(base_url, session_token).build()
    }

    pub fn builder(base_url: &str, session_token: &str) -> ClientBuilder {
        ClientBuilder {
            base_url: base_url.to_string(),
            session_token: session_token.to_string(),
            retry_policy: RetryPolicy::default(),
            timeout: DEFAULT_TIMEOUT,
            http: None,
        }
    }

    /// Client from the config file values; fails when no session token is set.
    pub fn from_config(cfg: &ClientConfig) -> anyhow::Result<Self> {
        let token = cfg
            .session_token
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("no session token configured"))?;
        let client = Self::builder(&cfg.base_url, token)
            .retry_policy(cfg.retry_policy()?)
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(client)
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    pub fn session_token(&self) -> String {
        self.session_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the token sent with subsequent requests.
    pub fn set_session_token(&self, token: &str) {
        *self
            .session_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = token.to_string();
    }

    fn endpoint(&self, path: &str) -> Result<Url, WaiaasError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Send one logical request, retrying per the client's policy, and decode the JSON answer.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T, WaiaasError> {
        let url = self.endpoint(path)?;
        let (method, url, body) = (&method, &url, body.as_ref());
        retry::execute(
            move || self.send_once(method, url, query, body),
            &self.retry_policy,
        )
        .await
    }

    async fn send_once<T: DeserializeOwned>(
        &self,
        method: &Method,
        url: &Url,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T, WaiaasError> {
        let auth = HeaderValue::from_str(&format!("Bearer {}", self.session_token()))
            .map_err(|_| WaiaasError::InvalidToken)?;
        let mut req = self
            .http
            .request(method.clone(), url.clone())
            .header(AUTHORIZATION, auth);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        tracing::debug!(%method, path = url.path(), "daemon request");
        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if status.is_client_error() || status.is_server_error() {
            let err = ApiError::from_response(status.as_u16(), &bytes);
            tracing::debug!(%method, path = url.path(), status = status.as_u16(), code = %err.code, "daemon error");
            return Err(err.into());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
