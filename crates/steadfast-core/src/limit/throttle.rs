//! Throttle: at most one fire per interval.

use std::time::Duration;
use tokio::time::Instant;

/// Allows an action at most once per interval.
///
/// The first [`try_fire`](Self::try_fire) succeeds immediately; further
/// calls are rejected until one full interval has elapsed since the last
/// accepted fire. State lives in the struct, owned by the caller.
///
/// # Examples
///
/// ```rust
/// use steadfast_core::limit::Throttle;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")] async fn main() {
/// let mut throttle = Throttle::new(Duration::from_millis(100));
/// assert!(throttle.try_fire());
/// assert!(!throttle.try_fire()); // too soon
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_fire: Option<Instant>,
}

impl Throttle {
    /// Create a throttle with the given minimum interval between fires.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fire: None,
        }
    }

    /// Attempt to fire. Returns `true` and records the fire time if at
    /// least one interval has passed since the last accepted fire.
    pub fn try_fire(&mut self) -> bool {
        let now = Instant::now();
        match self.last_fire {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_fire = Some(now);
                true
            }
        }
    }

    /// Time remaining until the next fire is allowed, or `None` if a fire
    /// would be accepted right now.
    pub fn remaining(&self) -> Option<Duration> {
        let last = self.last_fire?;
        let elapsed = Instant::now().duration_since(last);
        if elapsed >= self.interval {
            None
        } else {
            Some(self.interval - elapsed)
        }
    }

    /// The configured minimum interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Forget the last fire so the next [`try_fire`](Self::try_fire)
    /// succeeds immediately.
    pub fn reset(&mut self) {
        self.last_fire = None;
    }
}
