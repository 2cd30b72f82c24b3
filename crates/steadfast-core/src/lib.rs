#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core primitives for the steadfast ecosystem.
//!
//! This crate provides the building blocks shared across steadfast crates:
//!
//! - **Backoff strategies** via the [`retry::Backoff`] trait
//!   - Linear backoff (the default retry spacing)
//!   - Exponential backoff with jitter and a delay cap
//! - **Rate-limiting primitives** via [`limit::Throttle`] and
//!   [`limit::Debounce`], explicit state machines owned by the caller
//!
//! The retry loop itself lives in the `steadfast` crate; this crate only
//! answers "how long until the next try?" and "may I fire now?".
//!
//! # Examples
//!
//! Using the prelude for convenient imports:
//!
//! ```rust
//! use steadfast_core::prelude::*;
//! use std::time::Duration;
//!
//! let backoff = LinearBackoff::new(Duration::from_millis(250));
//! assert_eq!(backoff.delay_after(1), Duration::from_millis(250));
//! assert_eq!(backoff.delay_after(2), Duration::from_millis(500));
//! ```

pub mod limit;
pub mod retry;

/// Convenient re-exports of commonly used items.
///
/// Import all core primitives with:
///
/// ```rust
/// use steadfast_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::limit::{Debounce, Throttle};
    pub use crate::retry::{Backoff, ExponentialBackoff, ExponentialBackoffBuilder, LinearBackoff};
}
