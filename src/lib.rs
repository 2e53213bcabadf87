//! # wikirag
//!
//! A small retrieval augmented generation server. At startup it loads a
//! newline-delimited JSON wiki corpus into an embedded document store whose
//! vector field is derived from each article's text by an embedding model.
//! `POST /ask` then embeds the question, retrieves the closest articles, and
//! asks a chat model to answer using them as context.
//!
//! Embeddings and completions come from any OpenAI-compatible endpoint; the
//! default configuration targets a local Ollama at `http://localhost:11434/v1`
//! with `nomic-embed-text` and `gemma:2b`.
//!
//! ## Library usage
//!
//! ```rust,ignore
//! use wikirag::{startup, WikiRagConfig};
//!
//! let (config, _source) = WikiRagConfig::load_or_default("wikirag.toml")?;
//! let state = startup::initialize(config).await?;
//! let answer = state.pipeline.answer("What is the capital of France?").await?;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - HTTP handlers and routes
//! - [`cli`] - command-line parsing and output
//! - [`db`] - document store trait and embedded implementation
//! - [`llm`] - chat/embedding provider clients
//! - [`rag`] - corpus loading, prompt template, orchestration
//! - [`startup`] - one-time initialization and serving
//! - [`types`] - request/response types and errors
//! - [`utils`] - configuration

#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface.
pub mod cli;
/// Document store abstraction and embedded implementation.
pub mod db;
/// LLM provider clients and abstractions.
pub mod llm;
/// Retrieval Augmented Generation (RAG) components.
pub mod rag;
/// Startup initialization and server lifecycle.
pub mod startup;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use db::{DocumentStore, EmbeddedStore};
pub use llm::{LLMClient, Provider, ProviderClients};
pub use rag::{embeddings::Embedder, RagPipeline};
pub use types::{AppError, Result};
pub use utils::config::WikiRagConfig;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<WikiRagConfig>,
    /// Question answering pipeline
    pub pipeline: Arc<RagPipeline>,
}
