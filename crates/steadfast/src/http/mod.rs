//! HTTP transport implementation.

mod client;

pub use client::{HttpTransport, HttpTransportConfig};
