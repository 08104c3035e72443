//! Error types for daemon calls.
//!
//! [`WaiaasError`] is the only error the client returns. It implements
//! [`Retryable`] so the retry loop can classify it: daemon error responses
//! carry their HTTP status and `retryable` hint, every other failure reports
//! status `0` and is therefore not retried.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

use crate::retry::Retryable;

/// Error code used when the daemon's error body is not the usual JSON shape.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// An error response from the daemon (HTTP status >= 400).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// Machine-readable code, e.g. `SESSION_INVALID`.
    pub code: String,
    pub message: String,
    pub status_code: u16,
    /// The daemon's own hint on whether this error may be retried.
    pub retryable: bool,
    pub details: Option<serde_json::Map<String, serde_json::Value>>,
    pub request_id: Option<String>,
    /// Suggested remediation, e.g. `Re-authenticate with POST /v1/sessions`.
    pub hint: Option<String>,
}

/// Wire shape of the daemon's error body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    retryable: Option<bool>,
    details: Option<serde_json::Map<String, serde_json::Value>>,
    request_id: Option<String>,
    hint: Option<String>,
}

impl ApiError {
    /// Build from a status code and the raw response body.
    ///
    /// Bodies that are not a JSON error object become `UNKNOWN_ERROR` with the
    /// body text as message. A missing `retryable` field counts as `true`, so
    /// the status code alone decides.
    pub fn from_response(status_code: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => Self {
                code: parsed.code.unwrap_or_else(|| UNKNOWN_ERROR_CODE.to_string()),
                message: parsed.message.unwrap_or_default(),
                status_code,
                retryable: parsed.retryable.unwrap_or(true),
                details: parsed.details,
                request_id: parsed.request_id,
                hint: parsed.hint,
            },
            Err(_) => Self {
                code: UNKNOWN_ERROR_CODE.to_string(),
                message: String::from_utf8_lossy(body).into_owned(),
                status_code,
                retryable: true,
                details: None,
                request_id: None,
                hint: None,
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (HTTP {})", self.code, self.message, self.status_code)?;
        if let Some(hint) = &self.hint {
            write!(f, "; hint: {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Errors returned by [`WaiaasClient`](crate::client::WaiaasClient) calls.
#[derive(Debug, Error)]
pub enum WaiaasError {
    /// The daemon answered with an error status.
    #[error("daemon error {0}")]
    Api(ApiError),

    /// The request never produced a response (connect failure, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response did not match the expected record.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Base URL and path did not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The session token contains characters not allowed in a header.
    #[error("session token is not a valid header value")]
    InvalidToken,
}

impl WaiaasError {
    /// The daemon error, if this is one.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            WaiaasError::Api(e) => Some(e),
            _ => None,
        }
    }

    /// The daemon's error code, if this is a daemon error.
    pub fn code(&self) -> Option<&str> {
        self.api().map(|e| e.code.as_str())
    }
}

impl From<ApiError> for WaiaasError {
    fn from(e: ApiError) -> Self {
        WaiaasError::Api(e)
    }
}

impl Retryable for WaiaasError {
    fn status_code(&self) -> u16 {
        match self {
            WaiaasError::Api(e) => e.status_code,
            _ => 0,
        }
    }

    fn retryable(&self) -> bool {
        match self {
            WaiaasError::Api(e) => e.retryable,
            WaiaasError::Decode(_) | WaiaasError::InvalidUrl(_) | WaiaasError::InvalidToken => {
                false
            }
            WaiaasError::Transport(_) => true,
        }
    }
}
