#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Resilient request execution.
//!
//! `steadfast` issues a request through a pluggable transport, applies a
//! per-attempt timeout, and retries transient failures with configurable
//! backoff until success or the attempt budget runs out.
//!
//! # Architecture
//!
//! - **[`Executor`]**: the retry loop, with sequential attempts, timeout
//!   racing, and cooperative cancellation
//! - **[`Transport`] trait**: the collaborator that performs one send
//! - **[`RetryPolicy`]**: attempt budget, backoff spacing, per-attempt
//!   deadline
//! - **[`http::HttpTransport`]**: production transport over reqwest
//!
//! Every non-success path is observable in the returned [`Outcome`]: the
//! executor never swallows a failure and never panics on expected failure
//! kinds.
//!
//! # Usage
//!
//! ```ignore
//! use steadfast::{Executor, Request, RetryPolicy};
//! use steadfast::http::HttpTransport;
//! use std::time::Duration;
//!
//! let executor = Executor::new(HttpTransport::new()?);
//! let policy = RetryPolicy::builder()
//!     .max_attempts(3)
//!     .base_delay(Duration::from_secs(1))
//!     .timeout(Duration::from_secs(10))
//!     .build();
//!
//! let request = Request::new("GET", "https://api.example.com/health");
//! match executor.execute(&request, &policy).await? {
//!     steadfast::Outcome::Success(response) => println!("{}", response.status),
//!     steadfast::Outcome::Exhausted { last_error, attempts } => {
//!         eprintln!("failed after {} attempts: {}", attempts, last_error)
//!     }
//! }
//! ```

pub mod cancel;
pub mod error;
pub mod executor;
pub mod http;
pub mod policy;
pub mod traits;

// Re-export commonly used types
pub use cancel::CancelToken;
pub use error::{ErrorKind, PolicyError, Result, TransportError};
pub use executor::{Executor, Outcome};
pub use http::HttpTransport;
pub use policy::{RetryPolicy, RetryPolicyBuilder};
pub use traits::{Request, Response, Transport};
