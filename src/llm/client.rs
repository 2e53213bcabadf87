//! LLM client abstractions and provider selection
//!
//! - **OpenAI**: any OpenAI-compatible endpoint (OpenAI, Ollama `/v1`, vLLM, ...)
//! - **Ollama**: native Ollama API, behind the `ollama` feature

use crate::rag::embeddings::Embedder;
use crate::types::{AppError, ChatMessage, Result};
use crate::utils::config::{ProviderConfig, ProviderKind};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Generic LLM client trait for provider abstraction
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion from an ordered list of role/content messages
    async fn generate_with_history(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Generate a completion from a single user prompt
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_with_history(&[ChatMessage::user(prompt)])
            .await
    }

    /// Generate with system prompt
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        self.generate_with_history(&[ChatMessage::system(system), ChatMessage::user(prompt)])
            .await
    }

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Provider enum for runtime selection
#[derive(Debug, Clone)]
pub enum Provider {
    /// OpenAI-compatible API
    ///
    /// # Example
    /// ```rust,ignore
    /// let provider = Provider::OpenAI {
    ///     api_key: "ollama".to_string(),
    ///     api_base: "http://localhost:11434/v1".to_string(),
    ///     timeout: Duration::from_secs(60),
    /// };
    /// ```
    OpenAI {
        api_key: String,
        api_base: String,
        timeout: Duration,
    },

    /// Native Ollama API
    #[cfg(feature = "ollama")]
    Ollama { base_url: String, timeout: Duration },
}

/// The two collaborator handles a provider yields.
#[derive(Clone)]
pub struct ProviderClients {
    pub llm: Arc<dyn LLMClient>,
    pub embedder: Arc<dyn Embedder>,
}

impl Provider {
    /// Build a provider from the `[provider]` config section.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        match config.kind {
            ProviderKind::OpenAI => Ok(Provider::OpenAI {
                api_key: config
                    .api_key()
                    .map_err(|e| AppError::Configuration(e.to_string()))?,
                api_base: config.base_url.trim_end_matches('/').to_string(),
                timeout: config.timeout(),
            }),

            #[cfg(feature = "ollama")]
            ProviderKind::Ollama => Ok(Provider::Ollama {
                base_url: config.base_url.clone(),
                timeout: config.timeout(),
            }),

            #[cfg(not(feature = "ollama"))]
            ProviderKind::Ollama => Err(AppError::Configuration(
                "provider type 'ollama' requires the `ollama` cargo feature; \
                 use type 'openai' with Ollama's /v1 endpoint instead"
                    .to_string(),
            )),
        }
    }

    /// Create the chat and embedding clients for this provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built or the
    /// base URL is invalid.
    pub fn connect(&self, chat_model: &str) -> Result<ProviderClients> {
        match self {
            Provider::OpenAI {
                api_key,
                api_base,
                timeout,
            } => {
                let client = Arc::new(super::openai::OpenAIClient::new(
                    api_key.clone(),
                    api_base.clone(),
                    chat_model.to_string(),
                    *timeout,
                )?);
                Ok(ProviderClients {
                    llm: client.clone(),
                    embedder: client,
                })
            }

            #[cfg(feature = "ollama")]
            Provider::Ollama { base_url, timeout } => {
                let client = Arc::new(super::ollama::OllamaClient::new(
                    base_url,
                    chat_model.to_string(),
                    *timeout,
                )?);
                Ok(ProviderClients {
                    llm: client.clone(),
                    embedder: client,
                })
            }
        }
    }

    /// Get a human-readable name for this provider
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAI { .. } => "openai",
            #[cfg(feature = "ollama")]
            Provider::Ollama { .. } => "ollama",
        }
    }
}
