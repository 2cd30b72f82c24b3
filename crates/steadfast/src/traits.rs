//! Request and response model, and the transport seam.
//!
//! A [`Transport`] performs exactly one send per call. Retries, per-attempt
//! deadlines, and cancellation are layered on top by
//! [`Executor`](crate::Executor).

use crate::error::{Result, TransportError};
use async_trait::async_trait;
use std::collections::HashMap;

/// A request to be executed.
///
/// Built once by the caller and treated as immutable for the whole
/// execution; every retry attempt sends the same request.
#[derive(Debug, Clone)]
pub struct Request {
    /// Method (GET, POST, ...).
    pub method: String,

    /// Target URL.
    pub url: String,

    /// Request headers.
    pub headers: HashMap<String, String>,

    /// Request body (optional).
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Create a new request.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the body from a string.
    pub fn with_text_body(mut self, text: impl Into<String>) -> Self {
        self.body = Some(text.into().into_bytes());
        self
    }

    /// Set the body by serializing a value to JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the value cannot be encoded.
    pub fn with_json_body<T: serde::Serialize>(mut self, value: &T) -> Result<Self> {
        self.body = Some(serde_json::to_vec(value)?);
        Ok(self)
    }
}

/// A response received from the remote end.
#[derive(Debug, Clone)]
pub struct Response {
    /// Status code.
    pub status: u16,

    /// Response headers.
    pub headers: HashMap<String, String>,

    /// Response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Whether the status is in the success range (2xx).
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Whether the status signals an error (4xx or 5xx).
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// The body as a string.
    pub fn text(&self) -> std::result::Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.clone())
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the body is not valid JSON for `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(TransportError::from)
    }

    /// Look up a header by name, case-insensitively.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }
}

/// The collaborator that actually performs a request.
///
/// Implementations make exactly one attempt per [`send`](Self::send) call
/// and report every failure through [`TransportError`]; non-success
/// responses come back as `Ok` and are classified by the executor.
///
/// # Cancellation
///
/// The executor cancels an in-flight send by dropping its future, either
/// when the per-attempt deadline fires or when the caller cancels.
/// Implementations should release resources promptly on drop. If the
/// underlying operation cannot be halted, dropping only stops the local
/// waiting.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request once and return the remote end's response.
    async fn send(&self, request: &Request) -> Result<Response>;
}
