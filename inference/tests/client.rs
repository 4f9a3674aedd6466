use httpmock::prelude::HttpMockRequest;
use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;

use inference::{InferenceError, LocalClient, TextRequest};

fn body_str(req: &HttpMockRequest) -> String {
    req.body
        .as_ref()
        .map(|b| String::from_utf8_lossy(b).into_owned())
        .unwrap_or_default()
}

fn strict_json_body(req: &HttpMockRequest) -> bool {
    body_str(req).contains("\"format\":\"json\"")
}

fn plain_body(req: &HttpMockRequest) -> bool {
    !strict_json_body(req)
}

#[tokio::test]
async fn generate_text_returns_response_verbatim() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/generate")
            .json_body_partial(r#"{"model":"code-model","prompt":"hello","stream":false}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"response\":\"hi there\"}");
    });

    let client = LocalClient::new(server.base_url());
    let out = client
        .generate_text(&TextRequest::new("code-model", "hello"))
        .await
        .unwrap();
    mock.assert();
    assert_eq!(out, "hi there");
}

#[tokio::test]
async fn non_2xx_surfaces_status_and_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(500).body("model blew up");
    });

    let client = LocalClient::new(server.base_url());
    let err = client
        .generate_text(&TextRequest::new("m", "p"))
        .await
        .unwrap_err();
    match err {
        InferenceError::Request { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "model blew up");
        }
        other => panic!("expected Request error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let client = LocalClient::new("http://127.0.0.1:1");
    let err = client
        .generate_text(&TextRequest::new("m", "p"))
        .await
        .unwrap_err();
    assert!(matches!(err, InferenceError::Transport(_)));
}

#[tokio::test]
async fn strict_json_parses_without_fallback() {
    let server = MockServer::start_async().await;
    let strict = server.mock(|when, then| {
        when.method(POST).path("/api/generate").matches(strict_json_body);
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"response\":\"{\\\"a\\\":1}\"}");
    });

    let client = LocalClient::new(server.base_url());
    let value = client
        .generate_json(&TextRequest::new("m", "p"))
        .await
        .unwrap();
    assert_eq!(value, json!({"a": 1}));
    strict.assert_hits(1);
}

#[tokio::test]
async fn strict_attempt_sends_json_system_instruction() {
    let server = MockServer::start_async().await;
    fn has_json_system(req: &HttpMockRequest) -> bool {
        body_str(req).contains("Respond with valid JSON only.")
    }
    let strict = server.mock(|when, then| {
        when.method(POST).path("/api/generate").matches(has_json_system);
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"response\":\"{}\"}");
    });

    let client = LocalClient::new(server.base_url());
    client
        .generate_json(&TextRequest::new("m", "p"))
        .await
        .unwrap();
    strict.assert();
}

#[tokio::test]
async fn prose_wrapped_json_recovered_through_fallback() {
    let server = MockServer::start_async().await;
    let strict = server.mock(|when, then| {
        when.method(POST).path("/api/generate").matches(strict_json_body);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "response": "Here you go:\n```json\n{\"a\":1}\n```\n"
            }));
    });
    fn raw_json_retry(req: &HttpMockRequest) -> bool {
        plain_body(req) && body_str(req).contains("OUTPUT ONLY RAW JSON")
    }
    let fallback = server.mock(|when, then| {
        when.method(POST).path("/api/generate").matches(raw_json_retry);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "response": "Here you go:\n```json\n{\"a\":1}\n```\n"
            }));
    });

    let client = LocalClient::new(server.base_url());
    let value = client
        .generate_json(&TextRequest::new("m", "p"))
        .await
        .unwrap();
    assert_eq!(value, json!({"a": 1}));
    strict.assert_hits(1);
    fallback.assert_hits(1);
}

#[tokio::test]
async fn no_json_anywhere_fails_with_malformed_response() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"response": "I cannot help with that."}));
    });

    let client = LocalClient::new(server.base_url());
    let err = client
        .generate_json(&TextRequest::new("m", "p"))
        .await
        .unwrap_err();
    assert!(matches!(err, InferenceError::MalformedResponse { .. }));
}

#[tokio::test]
async fn endpoint_switch_changes_dialect_for_next_call() {
    let server = MockServer::start_async().await;
    let native = server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"response": "native"}));
    });
    let compatible = server.mock(|when, then| {
        when.method(POST).path("/v1/generate");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"response": "compatible"}));
    });

    let client = LocalClient::new(server.base_url());
    let req = TextRequest::new("m", "p");
    assert_eq!(client.generate_text(&req).await.unwrap(), "native");

    client.set_endpoint(format!("{}/v1", server.base_url()));
    assert_eq!(client.generate_text(&req).await.unwrap(), "compatible");

    native.assert_hits(1);
    compatible.assert_hits(1);
}
