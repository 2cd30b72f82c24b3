//! Backoff strategies for spacing out retry attempts.
//!
//! # Key Types
//!
//! - [`Backoff`] - Core trait for backoff strategies
//! - [`LinearBackoff`] - Delay grows linearly with the failure count
//! - [`ExponentialBackoff`] - Delay doubles (configurable) with jitter
//!
//! # Examples
//!
//! ```rust
//! use steadfast_core::retry::{Backoff, LinearBackoff};
//! use std::time::Duration;
//!
//! let backoff = LinearBackoff::new(Duration::from_secs(1));
//!
//! // Wait before the second attempt, after one failure:
//! assert_eq!(backoff.delay_after(1), Duration::from_secs(1));
//! ```

mod exponential;
mod linear;
mod strategy;

pub use exponential::{ExponentialBackoff, ExponentialBackoffBuilder};
pub use linear::LinearBackoff;
pub use strategy::Backoff;
