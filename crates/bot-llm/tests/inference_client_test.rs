//! Integration tests for InferenceClient against a mocked Inference API

use bot_llm::{HuggingFaceConfig, InferenceClient, LLMError};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> InferenceClient {
    let config =
        HuggingFaceConfig::new(Some("test-token".to_string())).with_api_base(server.uri());
    InferenceClient::new(config)
}

#[tokio::test]
async fn test_query_posts_inputs_with_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/distilbert-base-uncased"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            [{ "label": "POSITIVE", "score": 0.99 }]
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let value = client
        .query("Hello world, I feel great today!")
        .await
        .expect("json response");

    assert_eq!(value[0][0]["label"], "POSITIVE");

    let requests = mock_server.received_requests().await.expect("recorded");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({ "inputs": "Hello world, I feel great today!" }));
}

#[tokio::test]
async fn test_query_reports_status_and_body_on_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/distilbert-base-uncased"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Model is currently loading"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client.query("hi").await.expect_err("api error");

    match &error {
        LLMError::Api { status, body } => {
            assert_eq!(*status, 503);
            assert_eq!(body, "Model is currently loading");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        error.to_string(),
        "API Error: 503 - Model is currently loading"
    );
}

#[tokio::test]
async fn test_query_text_never_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"Invalid token"}"#))
        .mount(&mock_server)
        .await;

    let text = client_for(&mock_server).query_text("hi").await;

    assert!(text.contains("401"));
    assert!(text.contains("Invalid token"));
}

#[tokio::test]
async fn test_query_text_pretty_prints_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "score": 1 })))
        .mount(&mock_server)
        .await;

    let text = client_for(&mock_server).query_text("hi").await;

    assert_eq!(text, "{\n  \"score\": 1\n}");
}

#[tokio::test]
async fn test_custom_model_changes_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).with_model("gpt2");
    assert!(client.endpoint().ends_with("/models/gpt2"));
    client.query("hi").await.expect("ok");
}
