//! Rate-limiting primitives.
//!
//! [`Throttle`] and [`Debounce`] are explicit state machines owned by the
//! caller. Each instance holds its own timing state, so two unrelated call
//! sites never share a counter behind the scenes.
//!
//! Both measure time with [`tokio::time::Instant`], so they cooperate with
//! `tokio::time::pause` in tests.

mod debounce;
mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;
