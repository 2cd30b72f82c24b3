//! Linear backoff.

use super::strategy::Backoff;
use std::time::Duration;

/// Backoff whose delay grows linearly with the failure count.
///
/// After `n` failed attempts the delay is `base * n`: the first retry waits
/// one base interval, the second retry waits two, and so on. This is the
/// default spacing used by retry policies in the `steadfast` crate.
///
/// # Examples
///
/// ```rust
/// use steadfast_core::retry::{Backoff, LinearBackoff};
/// use std::time::Duration;
///
/// let backoff = LinearBackoff::new(Duration::from_secs(1));
/// assert_eq!(backoff.delay_after(1), Duration::from_secs(1));
/// assert_eq!(backoff.delay_after(2), Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearBackoff {
    base: Duration,
}

impl LinearBackoff {
    /// Create a linear backoff with the given base interval.
    pub fn new(base: Duration) -> Self {
        Self { base }
    }

    /// The base interval multiplied by the failure count on each retry.
    pub fn base(&self) -> Duration {
        self.base
    }
}

impl Default for LinearBackoff {
    /// One second base interval.
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Backoff for LinearBackoff {
    fn delay_after(&self, failed_attempts: u32) -> Duration {
        self.base
            .checked_mul(failed_attempts)
            .unwrap_or(Duration::MAX)
    }
}
