//! Integration tests for the HTTP transport, against a local mock server.

use std::time::Duration;
use steadfast::http::HttpTransport;
use steadfast::{Executor, Outcome, Request, RetryPolicy, Transport, TransportError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn send_performs_a_single_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = Request::new("GET", format!("{}/health", server.uri()));

    let response = transport.send(&request).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(response.is_success());
    assert_eq!(response.text().unwrap(), "ok");
}

#[tokio::test]
async fn headers_and_json_body_are_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"name": "widget"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 7, "name": "widget"})),
        )
        .mount(&server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = Request::new("POST", format!("{}/items", server.uri()))
        .with_header("content-type", "application/json")
        .with_json_body(&serde_json::json!({"name": "widget"}))
        .unwrap();

    let response = transport.send(&request).await.unwrap();

    assert_eq!(response.status, 201);
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["id"], 7);
}

#[tokio::test]
async fn non_success_statuses_come_back_as_responses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = Request::new("GET", format!("{}/missing", server.uri()));

    // Classification is the executor's job; the transport just reports.
    let response = transport.send(&request).await.unwrap();
    assert_eq!(response.status, 404);
    assert!(response.is_error());
}

#[tokio::test]
async fn refused_connections_classify_as_connection_errors() {
    let transport = HttpTransport::new().unwrap();
    // Reserved port with nothing listening.
    let request = Request::new("GET", "http://127.0.0.1:1/");

    let err = transport.send(&request).await.unwrap_err();
    assert!(matches!(err, TransportError::Connection(_)));
}

#[tokio::test]
async fn executor_retries_server_errors_until_the_service_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_string("recovered"))
        .mount(&server)
        .await;

    let executor = Executor::new(HttpTransport::new().unwrap());
    let policy = RetryPolicy::builder()
        .max_attempts(3)
        .base_delay(Duration::from_millis(10))
        .build();
    let request = Request::new("GET", format!("{}/flaky", server.uri()));

    let outcome = executor.execute(&request, &policy).await.unwrap();

    match outcome {
        Outcome::Success(response) => assert_eq!(response.text().unwrap(), "recovered"),
        other => panic!("expected recovery, got {:?}", other),
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn executor_times_out_slow_responses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
        .mount(&server)
        .await;

    let executor = Executor::new(HttpTransport::new().unwrap());
    let policy = RetryPolicy::builder()
        .max_attempts(2)
        .base_delay(Duration::from_millis(10))
        .timeout(Duration::from_millis(100))
        .build();
    let request = Request::new("GET", format!("{}/slow", server.uri()));

    let outcome = executor.execute(&request, &policy).await.unwrap();

    match outcome {
        Outcome::Exhausted {
            last_error,
            attempts,
        } => {
            assert_eq!(last_error, steadfast::ErrorKind::Timeout);
            assert_eq!(attempts, 2);
        }
        other => panic!("expected timeout exhaustion, got {:?}", other),
    }
}
