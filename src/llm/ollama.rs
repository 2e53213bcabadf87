use crate::llm::client::LLMClient;
use crate::rag::embeddings::Embedder;
use crate::types::{AppError, ChatMessage, MessageRole, Result};
use async_trait::async_trait;
use ollama_rs::{
    generation::{
        chat::{request::ChatMessageRequest, ChatMessage as OllamaMessage},
        embeddings::request::{EmbeddingsInput, GenerateEmbeddingsRequest},
    },
    Ollama,
};
use std::future::Future;
use std::time::Duration;

/// Client for the native Ollama API (`/api/chat`, `/api/embed`).
pub struct OllamaClient {
    client: Ollama,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: String, timeout: Duration) -> Result<Self> {
        let client = Ollama::try_new(base_url)
            .map_err(|e| AppError::Configuration(format!("Invalid Ollama URL '{}': {}", base_url, e)))?;

        Ok(Self {
            client,
            model,
            timeout,
        })
    }

    async fn with_timeout<T, F>(&self, what: &str, fut: F) -> std::result::Result<T, String>
    where
        F: Future<Output = std::result::Result<T, ollama_rs::error::OllamaError>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(_) => Err(format!("{} timed out after {:?}", what, self.timeout)),
        }
    }
}

#[async_trait]
impl LLMClient for OllamaClient {
    async fn generate_with_history(&self, messages: &[ChatMessage]) -> Result<String> {
        let chat_messages: Vec<OllamaMessage> = messages
            .iter()
            .map(|message| match message.role {
                MessageRole::System => OllamaMessage::system(message.content.clone()),
                MessageRole::User => OllamaMessage::user(message.content.clone()),
            })
            .collect();

        let request = ChatMessageRequest::new(self.model.clone(), chat_messages);

        let response = self
            .with_timeout("chat", self.client.send_chat_messages(request))
            .await
            .map_err(|e| AppError::LLM(format!("Ollama error: {}", e)))?;

        Ok(response.message.content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Embedder for OllamaClient {
    async fn embed(&self, model: &str, input: &str) -> Result<Vec<f32>> {
        let request = GenerateEmbeddingsRequest::new(
            model.to_string(),
            EmbeddingsInput::Single(input.to_string()),
        );

        let response = self
            .with_timeout("embedding", self.client.generate_embeddings(request))
            .await
            .map_err(|e| AppError::Embedding(format!("Ollama error: {}", e)))?;

        response
            .embeddings
            .into_iter()
            .next()
            .filter(|vector| !vector.is_empty())
            .ok_or_else(|| AppError::Embedding("No embedding returned".to_string()))
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}
