//! The resilient request executor.
//!
//! Drives a [`Transport`] through up to `max_attempts` sequential attempts,
//! racing each attempt against the policy's per-attempt deadline and
//! spacing retries with the policy's backoff.

use crate::cancel::CancelToken;
use crate::error::{ErrorKind, PolicyError, TransportError};
use crate::policy::RetryPolicy;
use crate::traits::{Request, Response, Transport};
use tracing::{debug, warn};

/// Terminal result of an execution.
#[derive(Debug)]
pub enum Outcome {
    /// An attempt completed with a success-classified response.
    Success(Response),

    /// No attempt succeeded within the budget, or a terminal failure
    /// (cancellation, a kind the policy does not retry) cut the run short.
    Exhausted {
        /// The final attempt's failure; earlier failures are logged, not kept.
        last_error: ErrorKind,
        /// Attempts made, counting the one that failed last. Never exceeds
        /// the policy's `max_attempts`.
        attempts: u32,
    },
}

impl Outcome {
    /// Whether the execution ended in success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The successful response, if any.
    pub fn into_response(self) -> Option<Response> {
        match self {
            Self::Success(response) => Some(response),
            Self::Exhausted { .. } => None,
        }
    }
}

/// Outcome of a single attempt.
#[derive(Debug)]
enum AttemptResult {
    Success(Response),
    Failure(ErrorKind),
}

/// Executes requests against a transport with retries, per-attempt
/// timeouts, and cooperative cancellation.
///
/// Attempts are strictly sequential: an attempt's outcome, including its
/// timeout, is resolved before the next one starts. The executor holds no
/// state between calls, so one instance can serve many concurrent
/// executions, each with its own internal timeline.
///
/// # Usage
///
/// ```ignore
/// use steadfast::{Executor, Request, RetryPolicy};
/// use steadfast::http::HttpTransport;
///
/// let executor = Executor::new(HttpTransport::new()?);
/// let request = Request::new("GET", "https://api.example.com/health");
/// let outcome = executor.execute(&request, &RetryPolicy::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Executor<T> {
    transport: T,
}

impl<T: Transport> Executor<T> {
    /// Create an executor over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// A reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute a request under a policy.
    ///
    /// Returns the first success, or [`Outcome::Exhausted`] carrying the
    /// final attempt's failure once the budget is spent. Expected failures
    /// (timeout, transport, server) never surface as `Err`; the only error
    /// is a policy that is rejected before any attempt is made.
    pub async fn execute(
        &self,
        request: &Request,
        policy: &RetryPolicy,
    ) -> Result<Outcome, PolicyError> {
        self.execute_with_cancel(request, policy, &CancelToken::new())
            .await
    }

    /// Execute a request under a policy, observing a cancellation token.
    ///
    /// Cancelling the token interrupts the in-flight attempt and any
    /// pending backoff wait, and prevents further attempts; the run ends
    /// with [`ErrorKind::Cancelled`].
    pub async fn execute_with_cancel(
        &self,
        request: &Request,
        policy: &RetryPolicy,
        cancel: &CancelToken,
    ) -> Result<Outcome, PolicyError> {
        policy.validate()?;

        let mut attempt: u32 = 1;
        loop {
            match self.run_attempt(request, policy, cancel).await {
                AttemptResult::Success(response) => {
                    debug!("attempt {} succeeded with status {}", attempt, response.status);
                    return Ok(Outcome::Success(response));
                }
                AttemptResult::Failure(kind) => {
                    if attempt >= policy.max_attempts() {
                        warn!("giving up after {} attempt(s): {}", attempt, kind);
                        return Ok(Outcome::Exhausted {
                            last_error: kind,
                            attempts: attempt,
                        });
                    }
                    if !policy.is_retryable(&kind) {
                        debug!("attempt {} failed ({}), not retryable", attempt, kind);
                        return Ok(Outcome::Exhausted {
                            last_error: kind,
                            attempts: attempt,
                        });
                    }

                    let delay = policy.delay_after(attempt);
                    debug!(
                        "attempt {}/{} failed ({}), retrying in {:?}",
                        attempt,
                        policy.max_attempts(),
                        kind,
                        delay
                    );

                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => {
                            return Ok(Outcome::Exhausted {
                                last_error: ErrorKind::Cancelled,
                                attempts: attempt,
                            });
                        }
                        _ = tokio::time::sleep(delay) => {}
                    }

                    attempt += 1;
                }
            }
        }
    }

    /// Run one attempt: the transport send raced against the per-attempt
    /// deadline and the cancellation token. The losing futures are dropped.
    async fn run_attempt(
        &self,
        request: &Request,
        policy: &RetryPolicy,
        cancel: &CancelToken,
    ) -> AttemptResult {
        let attempt = async {
            match policy.timeout() {
                Some(limit) => {
                    match tokio::time::timeout(limit, self.transport.send(request)).await {
                        Ok(result) => result,
                        Err(_) => Err(TransportError::Timeout),
                    }
                }
                None => self.transport.send(request).await,
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => AttemptResult::Failure(ErrorKind::Cancelled),
            result = attempt => match result {
                Ok(response) if response.is_success() => AttemptResult::Success(response),
                Ok(response) => AttemptResult::Failure(ErrorKind::Server(response.status)),
                Err(err) => AttemptResult::Failure(ErrorKind::from_transport(err)),
            },
        }
    }
}
