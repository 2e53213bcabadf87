//! Question answering over the document store.

use crate::db::{DocumentStore, SimilarityQuery};
use crate::llm::LLMClient;
use crate::rag::embeddings::Embedder;
use crate::rag::prompt::render_system_prompt;
use crate::types::Result;
use crate::utils::config::RetrievalConfig;
use std::sync::Arc;
use std::time::Instant;

/// Answer returned when the completion call fails.
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't generate an answer.";

/// Embed → retrieve → prompt → complete.
///
/// Holds shared handles only; one instance serves all requests.
pub struct RagPipeline {
    embedder: Arc<dyn Embedder>,
    llm: Arc<dyn LLMClient>,
    store: Arc<dyn DocumentStore>,
    collection: String,
    embedding_model: String,
    retrieval: RetrievalConfig,
}

impl RagPipeline {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        llm: Arc<dyn LLMClient>,
        store: Arc<dyn DocumentStore>,
        collection: impl Into<String>,
        embedding_model: impl Into<String>,
        retrieval: RetrievalConfig,
    ) -> Self {
        Self {
            embedder,
            llm,
            store,
            collection: collection.into(),
            embedding_model: embedding_model.into(),
            retrieval,
        }
    }

    /// Retrieve context snippets for a question, document marker stripped.
    ///
    /// # Errors
    ///
    /// Fails if the question cannot be embedded or the store query fails.
    pub async fn retrieve(&self, question: &str) -> Result<Vec<String>> {
        let query_text = format!("{}{}", self.retrieval.query_prefix, question);
        let vector = self
            .embedder
            .embed(&self.embedding_model, &query_text)
            .await?;

        let query = SimilarityQuery {
            vector,
            threshold: self.retrieval.similarity_threshold,
            limit: self.retrieval.limit,
        };
        let matches = self.store.search(&self.collection, &query).await?;

        tracing::debug!(
            matches = matches.len(),
            top_similarity = matches.first().map(|m| m.similarity),
            "Retrieved context"
        );

        Ok(matches
            .into_iter()
            .map(|m| {
                m.text
                    .strip_prefix(self.retrieval.document_prefix.as_str())
                    .map(str::to_string)
                    .unwrap_or(m.text)
            })
            .collect())
    }

    /// Answer a question.
    ///
    /// Embedding and retrieval failures are returned as errors. A failed
    /// completion is logged and answered with [`FALLBACK_ANSWER`].
    pub async fn answer(&self, question: &str) -> Result<String> {
        let start = Instant::now();

        let contexts = self.retrieve(question).await?;
        let system = render_system_prompt(&contexts);
        let prompt = format!("Question: {}", question);

        let answer = match self.llm.generate_with_system(&system, &prompt).await {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, model = %self.llm.model_name(), "Completion failed");
                FALLBACK_ANSWER.to_string()
            }
        };

        tracing::info!(
            contexts = contexts.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Question answered"
        );

        Ok(answer)
    }
}
