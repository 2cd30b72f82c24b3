//! Shared test helpers.

pub mod mock_transport;

use std::collections::HashMap;
use steadfast::{Request, Response};

/// A 200 response with a small body.
pub fn ok_response() -> Response {
    Response::new(200, HashMap::new(), b"ok".to_vec())
}

/// An empty response with the given status.
pub fn status_response(status: u16) -> Response {
    Response::new(status, HashMap::new(), Vec::new())
}

/// The request used throughout the executor tests.
pub fn request() -> Request {
    Request::new("GET", "https://service.test/data")
}
