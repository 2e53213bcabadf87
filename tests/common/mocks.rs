//! Mock collaborators for testing.
//!
//! Stand-ins for the chat model, the embedding service and the document
//! store, so the pipeline and HTTP layer can be exercised without network
//! access.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use wikirag::db::{CollectionSchema, DocumentStore, NewDocument, SimilarityMatch, SimilarityQuery};
use wikirag::types::{AppError, ChatMessage, Result};
use wikirag::{Embedder, LLMClient};

/// Mock LLM client with a configurable response that records what it was sent.
pub struct MockLLMClient {
    response: String,
    should_fail: bool,
    pub calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLLMClient {
    /// Create a new mock client that returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            should_fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            should_fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// System prompt of the most recent call.
    pub fn last_system_prompt(&self) -> Option<String> {
        self.calls.lock().last().and_then(|messages| {
            messages
                .iter()
                .find(|m| m.role == wikirag::types::MessageRole::System)
                .map(|m| m.content.clone())
        })
    }

    /// User message of the most recent call.
    pub fn last_user_message(&self) -> Option<String> {
        self.calls.lock().last().and_then(|messages| {
            messages
                .iter()
                .find(|m| m.role == wikirag::types::MessageRole::User)
                .map(|m| m.content.clone())
        })
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate_with_history(&self, messages: &[ChatMessage]) -> Result<String> {
        self.calls.lock().push(messages.to_vec());
        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Mock embedder mapping topic keywords onto orthogonal axes.
///
/// France/Paris lands on axis 0, Rust on axis 1, Nile/river on axis 2 and
/// anything else on axis 3, so similarity is 1.0 within a topic and 0.0 across.
pub struct MockEmbedder {
    should_fail: bool,
    pub inputs: Mutex<Vec<(String, String)>>,
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self {
            should_fail: false,
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn vector_for(text: &str) -> Vec<f32> {
        if text.contains("France") || text.contains("Paris") {
            vec![1.0, 0.0, 0.0, 0.0]
        } else if text.contains("Rust") {
            vec![0.0, 1.0, 0.0, 0.0]
        } else if text.contains("Nile") || text.contains("river") {
            vec![0.0, 0.0, 1.0, 0.0]
        } else {
            vec![0.0, 0.0, 0.0, 1.0]
        }
    }
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, model: &str, input: &str) -> Result<Vec<f32>> {
        self.inputs
            .lock()
            .push((model.to_string(), input.to_string()));
        if self.should_fail {
            return Err(AppError::Embedding("Mock embedding failure".to_string()));
        }
        Ok(Self::vector_for(input))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

/// Document store that records create mutations and can fail on demand.
pub struct RecordingStore {
    fail_after: Option<usize>,
    creates: AtomicUsize,
    pub documents: Mutex<Vec<(String, NewDocument)>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            fail_after: None,
            creates: AtomicUsize::new(0),
            documents: Mutex::new(Vec::new()),
        }
    }

    /// Accept `n` creates, then report a mutation error.
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::new()
        }
    }

    pub fn create_calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

impl Default for RecordingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn add_schema(&self, _schema: CollectionSchema) -> Result<()> {
        Ok(())
    }

    async fn create(&self, collection: &str, document: NewDocument) -> Result<String> {
        let n = self.creates.fetch_add(1, Ordering::SeqCst);
        if let Some(limit) = self.fail_after {
            if n >= limit {
                return Err(AppError::Database("Mock mutation failure".to_string()));
            }
        }
        self.documents
            .lock()
            .push((collection.to_string(), document));
        Ok(format!("doc-{}", n))
    }

    async fn search(
        &self,
        _collection: &str,
        _query: &SimilarityQuery,
    ) -> Result<Vec<SimilarityMatch>> {
        Ok(Vec::new())
    }

    async fn count(&self, _collection: &str) -> Result<usize> {
        Ok(self.documents.lock().len())
    }
}
