//! HTTP transport over reqwest.

use crate::error::{Result, TransportError};
use crate::traits::{Request, Response, Transport};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// HTTP transport backed by a pooled reqwest client.
///
/// Performs exactly one network round trip per [`send`](Transport::send);
/// retries, per-attempt deadlines, and cancellation belong to
/// [`Executor`](crate::Executor). Dropping the send future aborts the
/// in-flight request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Arc<ReqwestClient>,
}

impl HttpTransport {
    /// Create an HTTP transport with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(Default::default())
    }

    /// Create an HTTP transport with custom configuration.
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        let mut builder = ReqwestClient::builder()
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host);

        if let Some(timeout) = config.hard_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        Ok(Self {
            client: Arc::new(client),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<Response> {
        let method_upper = request.method.to_uppercase();
        let method = match method_upper.as_str() {
            "GET" => reqwest::Method::GET,
            "POST" => reqwest::Method::POST,
            "PUT" => reqwest::Method::PUT,
            "DELETE" => reqwest::Method::DELETE,
            "PATCH" => reqwest::Method::PATCH,
            "HEAD" => reqwest::Method::HEAD,
            "OPTIONS" => reqwest::Method::OPTIONS,
            _ => {
                return Err(TransportError::InvalidRequest(format!(
                    "unsupported HTTP method: {}",
                    request.method
                )));
            }
        };

        let url = Url::parse(&request.url)
            .map_err(|e| TransportError::InvalidRequest(format!("bad URL {}: {}", request.url, e)))?;

        let mut req = self.client.request(method, url);

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            req = req.body(body.clone());
        }

        let response = req.send().await?;

        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(e.to_string()))?
            .to_vec();

        Ok(Response::new(status, headers, body))
    }
}

/// HTTP transport configuration.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Maximum idle connections kept per host.
    pub pool_max_idle_per_host: usize,

    /// Whole-request cap enforced by the client itself, independent of any
    /// per-attempt deadline on the retry policy. Usually left unset.
    pub hard_timeout: Option<Duration>,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 10,
            hard_timeout: None,
        }
    }
}
