//! Retry policy: attempt budget, backoff spacing, per-attempt timeout.

use crate::error::{ErrorKind, PolicyError};
use std::sync::Arc;
use std::time::Duration;
use steadfast_core::retry::{Backoff, LinearBackoff};

/// Configuration for one execution: how many attempts, how they are spaced,
/// and how long each attempt may run.
///
/// # Default Configuration
///
/// - `max_attempts`: 3
/// - backoff: linear, 1s base (the first retry waits 1s, the second 2s, ...)
/// - `timeout`: none (an attempt may run as long as the transport allows)
/// - timeouts are retried like other transient failures
///
/// # Examples
///
/// ```rust
/// use steadfast::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::builder()
///     .max_attempts(5)
///     .base_delay(Duration::from_millis(200))
///     .timeout(Duration::from_secs(10))
///     .build();
///
/// assert_eq!(policy.max_attempts(), 5);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    timeout: Option<Duration>,
    retry_timeouts: bool,
    backoff: Arc<dyn Backoff>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RetryPolicy {
    /// Create a new builder.
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder::default()
    }

    /// Maximum number of attempts, counting the first.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Per-attempt deadline, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Delay to wait after `failed_attempts` attempts have failed.
    pub fn delay_after(&self, failed_attempts: u32) -> Duration {
        self.backoff.delay_after(failed_attempts)
    }

    /// Whether a failure of this kind is worth another attempt.
    ///
    /// Transport and server failures always are; timeouts are unless the
    /// policy was built with `retry_timeouts(false)`; cancellation never is.
    pub fn is_retryable(&self, kind: &ErrorKind) -> bool {
        match kind {
            ErrorKind::Timeout => self.retry_timeouts,
            ErrorKind::Transport(_) | ErrorKind::Server(_) => true,
            ErrorKind::Cancelled => false,
        }
    }

    /// Check the policy for values that can never work.
    ///
    /// The executor calls this before making any attempt; it is public so
    /// configuration layers can fail fast on their own.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.max_attempts < 1 {
            return Err(PolicyError::InvalidMaxAttempts(self.max_attempts));
        }
        if let Some(timeout) = self.timeout {
            if timeout.is_zero() {
                return Err(PolicyError::InvalidTimeout(timeout));
            }
        }
        Ok(())
    }
}

/// Builder for [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct RetryPolicyBuilder {
    max_attempts: u32,
    timeout: Option<Duration>,
    retry_timeouts: bool,
    backoff: Arc<dyn Backoff>,
}

impl Default for RetryPolicyBuilder {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            timeout: None,
            retry_timeouts: true,
            backoff: Arc::new(LinearBackoff::default()),
        }
    }
}

impl RetryPolicyBuilder {
    /// Set the maximum number of attempts, counting the first. Default: 3.
    ///
    /// A value of 0 is rejected by [`RetryPolicy::validate`] before any
    /// attempt is made.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Use linear backoff with the given base interval. Default: 1s.
    ///
    /// The wait after `n` failures is `base * n`.
    pub fn base_delay(mut self, base: Duration) -> Self {
        self.backoff = Arc::new(LinearBackoff::new(base));
        self
    }

    /// Use a custom backoff strategy instead of the linear default.
    ///
    /// The later of `base_delay` and `backoff` wins.
    pub fn backoff<B: Backoff + 'static>(mut self, backoff: B) -> Self {
        self.backoff = Arc::new(backoff);
        self
    }

    /// Set a per-attempt deadline. Default: none.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Whether timed-out attempts are retried. Default: true.
    pub fn retry_timeouts(mut self, retry: bool) -> Self {
        self.retry_timeouts = retry;
        self
    }

    /// Build the policy. Validation happens on execution (or via
    /// [`RetryPolicy::validate`]).
    pub fn build(self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            timeout: self.timeout,
            retry_timeouts: self.retry_timeouts,
            backoff: self.backoff,
        }
    }
}
