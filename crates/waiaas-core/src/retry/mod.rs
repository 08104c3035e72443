//! Retry and backoff for daemon calls.
//!
//! The policy decides (status set, exponential backoff with a ceiling); the
//! runner drives an async operation through it. Neither knows anything about
//! wallets or JSON, only about the [`Retryable`] facts of an error.

mod classify;
mod policy;
mod run;

pub use classify::{classify, Retryable};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy, DEFAULT_RETRYABLE_STATUS_CODES};
pub use run::{execute, execute_with_sleep};
