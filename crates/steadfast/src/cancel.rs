//! Cooperative cancellation of in-flight executions.

use std::sync::Arc;
use tokio::sync::watch;

/// Cancellation token shared between a caller and an execution.
///
/// Clones share state: cancelling any clone cancels them all, waking the
/// current attempt and any pending backoff wait. Cancellation is sticky:
/// a cancelled token never becomes live again.
///
/// # Examples
///
/// ```rust
/// use steadfast::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Create a new, live token.
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    /// Cancel the token, waking every waiter.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    /// Whether the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once the token is cancelled; pends forever otherwise.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        while !*rx.borrow_and_update() {
            if rx.changed().await.is_err() {
                // Sender is kept alive through self, so the channel cannot
                // close while we are waiting; never resolve regardless.
                std::future::pending::<()>().await;
            }
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
