mod common;

use common::mocks::{MockEmbedder, MockLLMClient};
use common::test_state;
use std::sync::Arc;
use wikirag::cli::{output::Output, run_ask};
use wikirag::types::AppError;
use wikirag::utils::config::RetrievalConfig;
use wikirag::{AppState, EmbeddedStore, RagPipeline, WikiRagConfig};

#[tokio::test]
async fn test_run_ask_succeeds() {
    let llm = Arc::new(MockLLMClient::new("Paris."));
    let (state, _corpus) = test_state(Arc::new(MockEmbedder::new()), llm.clone()).await;

    run_ask(&state, "What is the capital of France?", &Output::new(false))
        .await
        .unwrap();

    assert_eq!(llm.calls.lock().len(), 1);
}

#[tokio::test]
async fn test_run_ask_returns_pipeline_error() {
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

    let result = run_ask(&state, "What is Rust?", &Output::new(false)).await;

    assert!(matches!(result, Err(AppError::Embedding(_))));
}
