use std::collections::BTreeSet;
use std::time::Duration;

/// HTTP status codes treated as transient unless overridden.
pub const DEFAULT_RETRYABLE_STATUS_CODES: [u16; 5] = [429, 500, 502, 503, 504];

/// Classification of a failed attempt for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Status code is in the retryable set and the error allows retry.
    Transient(u16),
    /// The error itself forbids retry, whatever its status code.
    Rejected(u16),
    /// Status code outside the retryable set (0 for non-HTTP failures).
    Permanent(u16),
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Exponential backoff policy with a ceiling.
///
/// Built once per client (or per call for overrides) and never mutated
/// afterwards; clone it freely to share between concurrent calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
    max_delay: Duration,
    retryable_status_codes: BTreeSet<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            retryable_status_codes: DEFAULT_RETRYABLE_STATUS_CODES.into_iter().collect(),
        }
    }
}

impl RetryPolicy {
    /// Policy with the default status-code set.
    ///
    /// `base_delay <= max_delay` is expected but not checked.
    pub fn new(max_retries: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            max_delay,
            ..Self::default()
        }
    }

    /// Policy that never retries: one attempt, no sleeps.
    pub fn no_retry() -> Self {
        Self::default().with_max_retries(0)
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Replace the set of status codes considered transient.
    pub fn with_retryable_status_codes<I>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        self.retryable_status_codes = codes.into_iter().collect();
        self
    }

    /// Number of retries after the initial attempt.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    pub fn retryable_status_codes(&self) -> &BTreeSet<u16> {
        &self.retryable_status_codes
    }

    /// Backoff before retry number `attempt` (0-based): `base * 2^attempt`, capped at `max_delay`.
    pub fn get_delay(&self, attempt: u32) -> Duration {
        // 0 * 2^n overflows to NaN for large n; keep a zero base at zero.
        if self.base_delay.is_zero() {
            return Duration::ZERO;
        }
        let factor = 2f64.powi(attempt.min(i32::MAX as u32) as i32);
        Duration::try_from_secs_f64(self.base_delay.as_secs_f64() * factor)
            .map(|raw| raw.min(self.max_delay))
            .unwrap_or(self.max_delay)
    }

    pub fn is_retryable_status(&self, status_code: u16) -> bool {
        self.retryable_status_codes.contains(&status_code)
    }

    /// Decide what to do after attempt `attempt` (0-based) failed with `kind`.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        match kind {
            ErrorKind::Rejected(_) | ErrorKind::Permanent(_) => RetryDecision::NoRetry,
            ErrorKind::Transient(_) if attempt >= self.max_retries => RetryDecision::NoRetry,
            ErrorKind::Transient(_) => RetryDecision::RetryAfter(self.get_delay(attempt)),
        }
    }
}
