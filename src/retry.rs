//! Bounded retry for pours that hit transient contention.
//!
//! Only errors for which [`RetryPolicy::should_retry`] holds are retried; any
//! other failure is returned as soon as it happens.
//!
//! # Example
//!
//! ```rust
//! use drink_dispenser::retry::{retry_if, RetryPolicy};
//! use drink_dispenser::DispenserError;
//!
//! # async fn example() -> Result<(), DispenserError> {
//! let policy = RetryPolicy::builder().max_attempts(3).build();
//! let poured = retry_if(&policy, || async { Ok::<_, DispenserError>(42) }).await?;
//! assert_eq!(poured, 42);
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::DispenserError;

/// Retry policy: how many attempts, and how long to wait between them.
///
/// # Default Values
///
/// - `max_attempts`: 3 (the first try included)
/// - `initial_delay`: 100ms
/// - `max_delay`: 1 second
/// - `multiplier`: 2.0
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: usize,
    /// Delay before the second attempt
    pub initial_delay: Duration,
    /// Cap for exponential backoff
    pub max_delay: Duration,
    /// Growth factor applied per further attempt
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(1),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder {
            policy: Self::default(),
        }
    }

    /// Three attempts back to back, without sleeping.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Whether a failed attempt is worth repeating.
    pub fn should_retry(&self, err: &DispenserError) -> bool {
        err.is_transient()
    }

    /// Delay to wait after the given failed attempt (zero-based).
    ///
    /// delay = initial_delay * multiplier ^ attempt, capped at `max_delay`.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: usize) -> Duration {
        if attempt == 0 {
            return self.initial_delay.min(self.max_delay);
        }
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let delay_ms = self.initial_delay.as_millis() as f64 * self.multiplier.powi(exponent);
        if !delay_ms.is_finite() || delay_ms >= self.max_delay.as_millis() as f64 {
            return self.max_delay;
        }
        Duration::from_millis(delay_ms as u64)
    }
}

/// Builder for [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct RetryPolicyBuilder {
    policy: RetryPolicy,
}

impl RetryPolicyBuilder {
    /// Set the total number of attempts. Values below one are raised to one.
    #[must_use]
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.policy.max_attempts = attempts.max(1);
        self
    }

    #[must_use]
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.policy.initial_delay = delay;
        self
    }

    #[must_use]
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.policy.max_delay = delay;
        self
    }

    #[must_use]
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.policy.multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn build(self) -> RetryPolicy {
        self.policy
    }
}

/// Runs `operation` until it succeeds, fails with a non-retryable error, or
/// the policy's attempts are used up. The last error is returned.
pub async fn retry_if<F, Fut, T>(policy: &RetryPolicy, mut operation: F) -> Result<T, DispenserError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DispenserError>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(attempt, "Operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(err) => {
                attempt += 1;
                if !policy.should_retry(&err) || attempt >= policy.max_attempts {
                    return Err(err);
                }
                let delay = policy.delay_for_attempt(attempt - 1);
                warn!(attempt, delay_ms = delay.as_millis() as u64, error = %err, "Retrying after transient failure");
                if !delay.is_zero() {
                    sleep(delay).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn delay_grows_and_is_capped() {
        let policy = RetryPolicy::builder()
            .initial_delay(Duration::from_millis(100))
            .max_delay(Duration::from_millis(350))
            .multiplier(2.0)
            .build();

        assert_eq!(policy.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(350));
        assert_eq!(policy.delay_for_attempt(40), Duration::from_millis(350));
    }

    #[tokio::test]
    async fn transient_errors_are_retried_until_attempts_run_out() {
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let result: Result<(), _> = retry_if(&RetryPolicy::immediate(), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(DispenserError::temporarily_unavailable("hot_water"))
        })
        .await;

        assert_eq!(result, Err(DispenserError::temporarily_unavailable("hot_water")));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn permanent_errors_stop_immediately() {
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let result: Result<(), _> = retry_if(&RetryPolicy::immediate(), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(DispenserError::insufficient("hot_water"))
        })
        .await;

        assert_eq!(result, Err(DispenserError::insufficient("hot_water")));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn recovers_after_contention_clears() {
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let result = retry_if(&RetryPolicy::immediate(), move || async move {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(DispenserError::temporarily_unavailable("hot_milk"))
            } else {
                Ok("poured")
            }
        })
        .await;

        assert_eq!(result, Ok("poured"));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
