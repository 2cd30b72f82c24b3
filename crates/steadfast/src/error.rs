//! Error types for request execution.

use std::time::Duration;

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors produced by a transport while performing a single send.
///
/// These are the raw failures a [`Transport`](crate::Transport)
/// implementation can report. The executor classifies them into
/// [`ErrorKind`] when deciding whether to retry.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to reach the remote end.
    #[error("connection error: {0}")]
    Connection(String),

    /// I/O error below the transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The send did not complete in time.
    #[error("timed out")]
    Timeout,

    /// The request cannot be expressed by this transport.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Failed to encode a request body or decode a response body.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Generic transport error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Classified failure of one attempt.
///
/// This is what [`Outcome::Exhausted`](crate::Outcome::Exhausted) carries:
/// the final attempt's failure, reduced to the category the retry decision
/// was made on. The original error message or status is preserved inside
/// the variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// The attempt did not finish before the per-attempt deadline.
    #[error("attempt timed out")]
    Timeout,

    /// Network-level failure before any response arrived.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered, but with a non-success status.
    #[error("server error: status {0}")]
    Server(u16),

    /// The caller cancelled the execution.
    #[error("cancelled")]
    Cancelled,
}

impl ErrorKind {
    pub(crate) fn from_transport(err: TransportError) -> Self {
        match err {
            TransportError::Timeout => Self::Timeout,
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Rejected retry policy, reported before any attempt is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// `max_attempts` must allow at least one attempt.
    #[error("max_attempts must be at least 1, got {0}")]
    InvalidMaxAttempts(u32),

    /// A per-attempt timeout of zero can never be met.
    #[error("timeout must be greater than zero, got {0:?}")]
    InvalidTimeout(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_map_to_kinds() {
        assert_eq!(
            ErrorKind::from_transport(TransportError::Timeout),
            ErrorKind::Timeout
        );
        assert!(matches!(
            ErrorKind::from_transport(TransportError::Connection("refused".into())),
            ErrorKind::Transport(_)
        ));
        assert!(matches!(
            ErrorKind::from_transport(TransportError::Other("boom".into())),
            ErrorKind::Transport(_)
        ));
    }

    #[test]
    fn transport_kind_preserves_the_message() {
        let kind = ErrorKind::from_transport(TransportError::Connection("refused".into()));
        assert_eq!(kind.to_string(), "transport failure: connection error: refused");
    }
}
