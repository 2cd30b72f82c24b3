//! Mock transport for exercising the executor without a network.
//!
//! Replies are scripted per attempt and returned in FIFO order. Sent
//! requests are captured for assertion, attempts are counted, and a reply
//! can hang forever to simulate a stuck connection.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use steadfast::error::{Result as TransportResult, TransportError};
use steadfast::traits::{Request, Response, Transport};
use tokio::sync::Mutex;

/// Scripted reply for one attempt.
#[derive(Debug)]
pub enum Reply {
    /// Complete with this response.
    Respond(Response),
    /// Fail with this transport error.
    Fail(TransportError),
    /// Never resolve. The attempt only ends via timeout or cancellation.
    Hang,
}

/// A transport whose behavior is fully scripted.
///
/// Clones share state, so a test can keep one handle for assertions after
/// moving another into the executor.
#[derive(Debug, Clone)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    seen: Arc<Mutex<Vec<Request>>>,
    calls: Arc<AtomicU32>,
    delay: Option<Duration>,
}

impl MockTransport {
    /// Create a mock with an empty script.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            seen: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicU32::new(0)),
            delay: None,
        }
    }

    /// Create a builder for ergonomic test setup.
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder::default()
    }

    /// Append a reply to the script.
    #[allow(dead_code)]
    pub async fn queue(&self, reply: Reply) {
        self.replies.lock().await.push_back(reply);
    }

    /// How many times `send` has been invoked.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// The requests seen so far, in order.
    #[allow(dead_code)]
    pub async fn seen_requests(&self) -> Vec<Request> {
        self.seen.lock().await.clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &Request) -> TransportResult<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().await.push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.replies.lock().await.pop_front();
        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail(err)) => Err(err),
            Some(Reply::Hang) => std::future::pending().await,
            None => Err(TransportError::Other("mock reply script is empty".to_string())),
        }
    }
}

/// Builder for [`MockTransport`].
#[derive(Debug, Default)]
pub struct MockTransportBuilder {
    replies: Vec<Reply>,
    delay: Option<Duration>,
}

impl MockTransportBuilder {
    /// Append a reply to the script.
    pub fn with_reply(mut self, reply: Reply) -> Self {
        self.replies.push(reply);
        self
    }

    /// Append several replies to the script.
    #[allow(dead_code)]
    pub fn with_replies(mut self, replies: Vec<Reply>) -> Self {
        self.replies.extend(replies);
        self
    }

    /// Sleep this long inside every `send` before consulting the script.
    #[allow(dead_code)]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Build the mock.
    pub fn build(self) -> MockTransport {
        MockTransport {
            replies: Arc::new(Mutex::new(VecDeque::from(self.replies))),
            seen: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicU32::new(0)),
            delay: self.delay,
        }
    }
}
