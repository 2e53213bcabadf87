mod common;

use axum::http::{header, Method, StatusCode};
use axum_test::TestServer;
use common::mocks::{MockEmbedder, MockLLMClient};
use common::test_state;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;
use wikirag::api::routes::create_router;
use wikirag::rag::FALLBACK_ANSWER;
use wikirag::types::AskResponse;
use wikirag::utils::config::RetrievalConfig;
use wikirag::{AppState, EmbeddedStore, RagPipeline, WikiRagConfig};

async fn create_test_server(llm: MockLLMClient) -> TestServer {
    let (state, _corpus) = test_state(Arc::new(MockEmbedder::new()), Arc::new(llm)).await;
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

// ============= Health =============

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(MockLLMClient::new("unused")).await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("ok");
}

// ============= POST /ask =============

#[tokio::test]
async fn test_ask_returns_answer() {
    let server = create_test_server(MockLLMClient::new("  Paris.\n")).await;

    let response = server
        .post("/ask")
        .json(&json!({"question": "What is the capital of France?"}))
        .await;

    response.assert_status_ok();
    let body: AskResponse = response.json();
    assert_eq!(body.answer, "Paris.");
}

#[tokio::test]
async fn test_ask_without_content_type() {
    let server = create_test_server(MockLLMClient::new("Paris.")).await;

    let response = server
        .post("/ask")
        .text(r#"{"question": "What is the capital of France?"}"#)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"answer": "Paris."}));
}

#[tokio::test]
async fn test_ask_response_is_json() {
    let server = create_test_server(MockLLMClient::new("Paris.")).await;

    let response = server
        .post("/ask")
        .json(&json!({"question": "What is the capital of France?"}))
        .await;

    assert_eq!(
        response.header(header::CONTENT_TYPE),
        "application/json"
    );
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}

#[rstest]
#[case::empty("")]
#[case::spaces("   ")]
#[case::whitespace("\n\t ")]
#[tokio::test]
async fn test_ask_rejects_blank_question(#[case] question: &str) {
    let llm = Arc::new(MockLLMClient::new("unused"));
    let (state, _corpus) = test_state(Arc::new(MockEmbedder::new()), llm.clone()).await;
    let server = TestServer::new(create_router(state)).expect("Failed to create test server");

    let response = server.post("/ask").json(&json!({"question": question})).await;

    response.assert_status_bad_request();
    response.assert_json(&json!({"error": "invalid payload"}));
    assert!(llm.calls.lock().is_empty());
}

#[rstest]
#[case::not_json("question=hello")]
#[case::missing_field(r#"{"query": "What is Rust?"}"#)]
#[case::wrong_type(r#"{"question": 42}"#)]
#[case::empty_body("")]
#[tokio::test]
async fn test_ask_rejects_invalid_payload(#[case] body: &'static str) {
    let server = create_test_server(MockLLMClient::new("unused")).await;

    let response = server.post("/ask").text(body).await;

    response.assert_status_bad_request();
    response.assert_json(&json!({"error": "invalid payload"}));
}

#[tokio::test]
async fn test_ask_completion_failure_uses_fallback() {
    let server = create_test_server(MockLLMClient::failing()).await;

    let response = server
        .post("/ask")
        .json(&json!({"question": "What is Rust?"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"answer": FALLBACK_ANSWER}));
}

#[tokio::test]
async fn test_ask_embedding_failure_is_server_error() {
    let config = WikiRagConfig::default();
    let pipeline = RagPipeline::new(
        Arc::new(MockEmbedder::failing()),
        Arc::new(MockLLMClient::new("unused")),
        Arc::new(EmbeddedStore::new()),
        config.corpus.collection.clone(),
        config.models.embedding.clone(),
        RetrievalConfig::default(),
    );
    let state = AppState {
        config: Arc::new(config),
        pipeline: Arc::new(pipeline),
    };
    let server = TestServer::new(create_router(state)).expect("Failed to create test server");

    let response = server
        .post("/ask")
        .json(&json!({"question": "What is Rust?"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert!(body["error"]
        .as_str()
        .is_some_and(|msg| msg.starts_with("internal error")));
}

// ============= Other methods on /ask =============

#[tokio::test]
async fn test_ask_preflight() {
    let server = create_test_server(MockLLMClient::new("unused")).await;

    let response = server.method(Method::OPTIONS, "/ask").await;

    response.assert_status_ok();
    assert!(response.text().is_empty());
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");

    let methods = response.header(header::ACCESS_CONTROL_ALLOW_METHODS);
    let methods = methods.to_str().expect("allow-methods is ascii");
    assert!(methods.contains("POST"));
    assert!(methods.contains("OPTIONS"));

    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_HEADERS));
}

#[rstest]
#[case::get(Method::GET)]
#[case::put(Method::PUT)]
#[case::delete(Method::DELETE)]
#[tokio::test]
async fn test_ask_other_methods_not_allowed(#[case] method: Method) {
    let server = create_test_server(MockLLMClient::new("unused")).await;

    let response = server.method(method, "/ask").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_json(&json!({"error": "only POST allowed"}));
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}

#[tokio::test]
async fn test_unknown_route() {
    let server = create_test_server(MockLLMClient::new("unused")).await;

    let response = server.get("/nope").await;
    response.assert_status_not_found();
}
