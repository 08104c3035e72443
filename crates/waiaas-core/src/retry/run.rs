//! Retry loop: run an async operation until success or the policy says stop.

use std::future::Future;
use std::time::Duration;

use super::classify::{classify, Retryable};
use super::policy::{RetryDecision, RetryPolicy};

/// Runs `operation` until it succeeds or the retry policy says to stop.
///
/// On a retryable failure, sleeps for the backoff (`tokio::time::sleep`) and
/// tries again. The last error is returned unchanged.
pub async fn execute<T, E, F, Fut>(operation: F, policy: &RetryPolicy) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + std::fmt::Display,
{
    execute_with_sleep(operation, policy, tokio::time::sleep).await
}

/// Like [`execute`] but with a caller-supplied sleep.
///
/// Attempts are strictly sequential: the next one starts only after the
/// previous error was classified and its sleep future completed. Dropping the
/// returned future stops the loop at whichever await it is parked on.
pub async fn execute_with_sleep<T, E, F, Fut, S, SFut>(
    mut operation: F,
    policy: &RetryPolicy,
    mut sleep: S,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + std::fmt::Display,
    S: FnMut(Duration) -> SFut,
    SFut: Future<Output = ()>,
{
    let mut attempt = 0u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };
        let kind = classify(policy, &err);
        match policy.decide(attempt, kind) {
            RetryDecision::NoRetry => {
                if attempt > 0 {
                    tracing::warn!(
                        attempts = attempt + 1,
                        ?kind,
                        "giving up after retries: {}",
                        err
                    );
                }
                return Err(err);
            }
            RetryDecision::RetryAfter(delay) => {
                tracing::debug!(
                    attempt,
                    ?kind,
                    delay_ms = delay.as_millis() as u64,
                    "retrying after error: {}",
                    err
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    struct TestError {
        code: &'static str,
        status: u16,
        retryable: bool,
        attempt: u32,
    }

    impl TestError {
        fn new(code: &'static str, status: u16, retryable: bool) -> Self {
            Self {
                code,
                status,
                retryable,
                attempt: 0,
            }
        }
    }

    impl fmt::Display for TestError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} (HTTP {})", self.code, self.status)
        }
    }

    impl Retryable for TestError {
        fn status_code(&self) -> u16 {
            self.status
        }

        fn retryable(&self) -> bool {
            self.retryable
        }
    }

    /// Records every requested sleep and returns immediately.
    #[derive(Clone, Default)]
    struct RecordingSleep {
        calls: Arc<Mutex<Vec<Duration>>>,
    }

    impl RecordingSleep {
        fn sleep(&self) -> impl FnMut(Duration) -> std::future::Ready<()> + '_ {
            move |d| {
                self.calls.lock().unwrap().push(d);
                std::future::ready(())
            }
        }

        fn secs(&self) -> Vec<f64> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(Duration::as_secs_f64)
                .collect()
        }
    }

    fn policy(max_retries: u32, base: f64, max: f64) -> RetryPolicy {
        RetryPolicy::new(
            max_retries,
            Duration::from_secs_f64(base),
            Duration::from_secs_f64(max),
        )
    }

    #[tokio::test]
    async fn succeeds_on_first_attempt() {
        let calls = AtomicU32::new(0);
        let sleeps = RecordingSleep::default();
        let result: Result<&str, TestError> = execute_with_sleep(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("success")
            },
            &RetryPolicy::default(),
            sleeps.sleep(),
        )
        .await;
        assert_eq!(result.unwrap(), "success");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sleeps.secs().is_empty());
    }

    #[tokio::test]
    async fn rate_limited_twice_then_succeeds() {
        let calls = AtomicU32::new(0);
        let sleeps = RecordingSleep::default();
        let result = execute_with_sleep(
            || async {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 3 {
                    Err(TestError::new("RATE_LIMIT_EXCEEDED", 429, true))
                } else {
                    Ok("success")
                }
            },
            &policy(3, 1.0, 10.0),
            sleeps.sleep(),
        )
        .await;
        assert_eq!(result.unwrap(), "success");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(sleeps.secs(), vec![1.0, 2.0]);
    }

    #[tokio::test]
    async fn single_429_sleeps_base_delay_once() {
        let calls = AtomicU32::new(0);
        let sleeps = RecordingSleep::default();
        let result = execute_with_sleep(
            || async {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(TestError::new("RATE_LIMIT_EXCEEDED", 429, true))
                } else {
                    Ok(7)
                }
            },
            &policy(3, 1.0, 10.0),
            sleeps.sleep(),
        )
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(sleeps.secs(), vec![1.0]);
    }

    #[tokio::test]
    async fn exhausts_retries_and_returns_last_error() {
        let calls = AtomicU32::new(0);
        let sleeps = RecordingSleep::default();
        let result: Result<(), TestError> = execute_with_sleep(
            || async {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                let mut e = TestError::new("SERVICE_UNAVAILABLE", 503, true);
                e.attempt = n;
                Err(e)
            },
            &policy(3, 1.0, 10.0),
            sleeps.sleep(),
        )
        .await;
        let err = result.unwrap_err();
        assert_eq!(err.code, "SERVICE_UNAVAILABLE");
        assert_eq!(err.status, 503);
        assert_eq!(err.attempt, 4, "error from the last attempt is returned");
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(sleeps.secs(), vec![1.0, 2.0, 4.0]);
    }

    #[tokio::test]
    async fn non_retryable_status_returns_immediately() {
        let calls = AtomicU32::new(0);
        let sleeps = RecordingSleep::default();
        let result: Result<(), TestError> = execute_with_sleep(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(TestError::new("ACTION_VALIDATION_FAILED", 400, false))
            },
            &RetryPolicy::default(),
            sleeps.sleep(),
        )
        .await;
        let err = result.unwrap_err();
        assert_eq!(err.code, "ACTION_VALIDATION_FAILED");
        assert_eq!(err.status, 400);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sleeps.secs().is_empty());
    }

    #[tokio::test]
    async fn non_retryable_flag_wins_over_retryable_status() {
        let calls = AtomicU32::new(0);
        let sleeps = RecordingSleep::default();
        let result: Result<(), TestError> = execute_with_sleep(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(TestError::new("CUSTOM_ERROR", 500, false))
            },
            &RetryPolicy::default(),
            sleeps.sleep(),
        )
        .await;
        assert_eq!(result.unwrap_err().code, "CUSTOM_ERROR");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sleeps.secs().is_empty());
    }

    #[tokio::test]
    async fn status_zero_is_not_retried() {
        let calls = AtomicU32::new(0);
        let sleeps = RecordingSleep::default();
        let result: Result<(), TestError> = execute_with_sleep(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(TestError::new("CONNECTION_REFUSED", 0, true))
            },
            &RetryPolicy::default(),
            sleeps.sleep(),
        )
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sleeps.secs().is_empty());
    }

    #[tokio::test]
    async fn delays_are_capped() {
        let calls = AtomicU32::new(0);
        let sleeps = RecordingSleep::default();
        let result: Result<(), TestError> = execute_with_sleep(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(TestError::new("INTERNAL_ERROR", 500, true))
            },
            &policy(4, 2.0, 5.0),
            sleeps.sleep(),
        )
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 5);
        assert_eq!(sleeps.secs(), vec![2.0, 4.0, 5.0, 5.0]);
    }

    #[tokio::test]
    async fn zero_retries_means_one_attempt() {
        let calls = AtomicU32::new(0);
        let sleeps = RecordingSleep::default();
        let result: Result<(), TestError> = execute_with_sleep(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(TestError::new("SERVICE_UNAVAILABLE", 503, true))
            },
            &RetryPolicy::no_retry(),
            sleeps.sleep(),
        )
        .await;
        assert_eq!(result.unwrap_err().status, 503);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sleeps.secs().is_empty());
    }

    #[tokio::test]
    async fn success_on_last_allowed_attempt() {
        let calls = AtomicU32::new(0);
        let sleeps = RecordingSleep::default();
        let result = execute_with_sleep(
            || async {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n <= 2 {
                    Err(TestError::new("BAD_GATEWAY", 502, true))
                } else {
                    Ok(n)
                }
            },
            &policy(2, 1.0, 10.0),
            sleeps.sleep(),
        )
        .await;
        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(sleeps.secs(), vec![1.0, 2.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_sleep_waits_out_the_backoff() {
        let calls = AtomicU32::new(0);
        let started = tokio::time::Instant::now();
        let result = execute(
            || async {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(TestError::new("INTERNAL_ERROR", 500, true))
                } else {
                    Ok(())
                }
            },
            &policy(3, 1.0, 10.0),
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_during_sleep_stops_further_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let policy = policy(5, 1.0, 10.0);
        let run = async move {
            execute(
                || {
                    let counter = Arc::clone(&counter);
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        Err::<(), _>(TestError::new("SERVICE_UNAVAILABLE", 503, true))
                    }
                },
                &policy,
            )
            .await
        };

        // Attempt 0 at t=0, attempt 1 at t=1s, then parked in a 2s sleep.
        let outcome = tokio::time::timeout(Duration::from_millis(1500), run).await;
        assert!(outcome.is_err(), "retry loop should still be sleeping");
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn concurrent_calls_share_one_policy() {
        let policy = Arc::new(policy(2, 0.001, 0.002));
        let mut handles = Vec::new();
        for i in 0..8u32 {
            let policy = Arc::clone(&policy);
            handles.push(tokio::spawn(async move {
                let calls = AtomicU32::new(0);
                let result = execute(
                    || async {
                        if calls.fetch_add(1, Ordering::SeqCst) < i % 3 {
                            Err(TestError::new("SERVICE_UNAVAILABLE", 503, true))
                        } else {
                            Ok(i)
                        }
                    },
                    &policy,
                )
                .await;
                (i, result, calls.load(Ordering::SeqCst))
            }));
        }
        for handle in handles {
            let (i, result, calls) = handle.await.unwrap();
            assert_eq!(result.unwrap(), i);
            assert_eq!(calls, i % 3 + 1);
        }
    }
}
