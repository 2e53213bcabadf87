//! Retrieval Augmented Generation (RAG) Pipeline
//!
//! # Module Structure
//!
//! - [`rag::embeddings`](crate::rag::embeddings) - the [`Embedder`](embeddings::Embedder) seam
//! - [`rag::corpus`](crate::rag::corpus) - newline-delimited JSON ingestion
//! - [`rag::prompt`](crate::rag::prompt) - system prompt rendering
//! - [`rag::pipeline`](crate::rag::pipeline) - the question answering orchestrator
//!
//! # RAG Pipeline
//!
//! 1. **Ingestion** - each article is prefixed with `search_document: ` and
//!    created in the store, which derives its vector from the text
//! 2. **Retrieval** - the question, prefixed with `search_query: `, is
//!    embedded and the closest documents above the threshold are fetched
//! 3. **Generation** - the snippets are rendered into the system prompt and
//!    the question is sent to the chat model
//!
//! Both markers are what asymmetric embedding models such as
//! `nomic-embed-text` expect on documents and queries respectively.

pub mod corpus;
pub mod embeddings;
pub mod pipeline;
pub mod prompt;

pub use pipeline::{RagPipeline, FALLBACK_ANSWER};
