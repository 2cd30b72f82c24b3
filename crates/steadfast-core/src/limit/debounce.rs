//! Debounce: act only after triggers go quiet.

use std::time::Duration;
use tokio::time::Instant;

/// Defers an action until triggers have been quiet for a full period.
///
/// Every [`trigger`](Self::trigger) pushes the deadline out to
/// `now + quiet_period`; the action is due once the deadline passes with
/// no further triggers. The pending deadline is held in the struct, owned
/// by the caller.
///
/// # Examples
///
/// ```rust
/// use steadfast_core::limit::Debounce;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")] async fn main() {
/// let mut debounce = Debounce::new(Duration::from_millis(50));
/// debounce.trigger();
/// assert!(debounce.is_pending());
/// debounce.settled().await; // waits out the quiet period
/// assert!(!debounce.is_pending());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Debounce {
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    /// Create a debounce with the given quiet period.
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    /// Record a trigger, pushing the deadline out by one quiet period.
    pub fn trigger(&mut self) {
        self.deadline = Some(Instant::now() + self.quiet_period);
    }

    /// Whether a trigger is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// If the quiet period has elapsed since the last trigger, consume the
    /// pending deadline and return `true`.
    pub fn poll_ready(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Wait out the pending quiet period, if any, consuming the deadline.
    pub async fn settled(&mut self) {
        if let Some(deadline) = self.deadline.take() {
            tokio::time::sleep_until(deadline).await;
        }
    }

    /// Drop any pending trigger without acting on it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// The configured quiet period.
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }
}
