//! Classify failed attempts into retry policy error kinds.

use crate::retry::policy::{ErrorKind, RetryPolicy};

/// The two facts the retry loop needs from an error.
///
/// Failures that did not come from an HTTP response report status `0`,
/// which is never in a retryable set, so they are not retried.
pub trait Retryable {
    /// HTTP status of the failed response, or `0` for non-HTTP failures.
    fn status_code(&self) -> u16;

    /// Whether this particular error may ever be retried.
    fn retryable(&self) -> bool {
        true
    }
}

impl<E: Retryable + ?Sized> Retryable for &E {
    fn status_code(&self) -> u16 {
        (**self).status_code()
    }

    fn retryable(&self) -> bool {
        (**self).retryable()
    }
}

impl<E: Retryable + ?Sized> Retryable for Box<E> {
    fn status_code(&self) -> u16 {
        (**self).status_code()
    }

    fn retryable(&self) -> bool {
        (**self).retryable()
    }
}

/// Classify an error against a policy's retryable status set.
pub fn classify<E: Retryable + ?Sized>(policy: &RetryPolicy, err: &E) -> ErrorKind {
    let status = err.status_code();
    if !err.retryable() {
        ErrorKind::Rejected(status)
    } else if policy.is_retryable_status(status) {
        ErrorKind::Transient(status)
    } else {
        ErrorKind::Permanent(status)
    }
}
