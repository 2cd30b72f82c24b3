//! Backoff strategy trait.

use std::fmt;
use std::time::Duration;

/// A strategy for spacing out retry attempts.
///
/// Implementations answer a single question: given that some number of
/// attempts have already failed, how long should the caller wait before
/// trying again? The retry loop itself (attempt budget, error
/// classification, cancellation) is owned by whoever drives the strategy.
///
/// # Attempt Numbering
///
/// `failed_attempts` is 1-indexed: the method is called with `1` after the
/// first failure, so the returned duration is the wait before attempt 2.
/// It is never called with `0`.
///
/// # Examples
///
/// ```rust
/// use steadfast_core::retry::{Backoff, LinearBackoff};
/// use std::time::Duration;
///
/// let backoff = LinearBackoff::new(Duration::from_millis(100));
/// assert_eq!(backoff.delay_after(1), Duration::from_millis(100));
/// assert_eq!(backoff.delay_after(3), Duration::from_millis(300));
/// ```
pub trait Backoff: fmt::Debug + Send + Sync {
    /// Delay to insert after `failed_attempts` attempts have failed.
    fn delay_after(&self, failed_attempts: u32) -> Duration;
}
