//! LLM Provider Clients and Abstractions
//!
//! Chat completion and embedding generation are delegated to an external
//! service. This module hides the wire protocol behind two traits:
//! - [`LLMClient`] - chat completion
//! - [`Embedder`](crate::rag::embeddings::Embedder) - embedding generation
//!
//! [`Provider`] picks the backend from configuration and returns both as
//! trait objects sharing one connection.
//!
//! # Supported Providers
//!
//! - `openai` - any OpenAI-compatible endpoint (default; Ollama serves one at `/v1`)
//! - `ollama` - native Ollama API, enabled with the `ollama` cargo feature

/// Core LLM client trait and provider selection.
pub mod client;

pub mod openai;

#[cfg(feature = "ollama")]
pub mod ollama;

pub use client::{LLMClient, Provider, ProviderClients};
