//! Document store abstraction
//!
//! A [`DocumentStore`] accepts a collection schema whose vector field is
//! derived from a text field by a named embedding provider, creates documents
//! through a mutation call, and answers similarity-ranked queries.
//!
//! # Example
//!
//! ```rust,ignore
//! use wikirag::db::{CollectionSchema, DocumentStore, EmbeddedStore, NewDocument};
//!
//! let store = EmbeddedStore::new().with_provider(embedder);
//! store.add_schema(CollectionSchema::wiki("Wiki", "openai", "nomic-embed-text")).await?;
//! store.create("Wiki", NewDocument::new("search_document: ...", "history")).await?;
//! ```

use crate::types::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Vector field computed by the store from one or more text fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingField {
    /// Name of the vector field (e.g. `text_v`)
    pub name: String,
    /// Text fields concatenated to produce the embedding input
    pub source_fields: Vec<String>,
    /// Name of the registered embedding provider
    pub provider: String,
    /// Model passed to the provider
    pub model: String,
}

/// Schema of one collection: plain string fields plus a derived vector field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSchema {
    pub name: String,
    pub fields: Vec<String>,
    pub embedding: EmbeddingField,
}

impl CollectionSchema {
    /// The `Wiki` collection: `text`, `category`, and `text_v` derived from `text`.
    pub fn wiki(collection: &str, provider: &str, model: &str) -> Self {
        Self {
            name: collection.to_string(),
            fields: vec!["text".to_string(), "category".to_string()],
            embedding: EmbeddingField {
                name: "text_v".to_string(),
                source_fields: vec!["text".to_string()],
                provider: provider.to_string(),
                model: model.to_string(),
            },
        }
    }
}

/// Payload of a create mutation. Carries no vector: the store derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    pub text: String,
    pub category: String,
}

impl NewDocument {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Value of a named string field, used to build embedding input.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "text" => Some(&self.text),
            "category" => Some(&self.category),
            _ => None,
        }
    }
}

/// Similarity-scored filter/order/limit over a collection's vector field.
#[derive(Debug, Clone)]
pub struct SimilarityQuery {
    pub vector: Vec<f32>,
    /// Only matches scoring strictly above this value are returned
    pub threshold: f32,
    pub limit: usize,
}

/// One ranked result of a [`SimilarityQuery`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatch {
    pub id: String,
    pub text: String,
    pub category: String,
    pub similarity: f32,
}

/// Abstract trait for document store operations
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Register a collection schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection already exists or the schema names
    /// an embedding provider the store does not know.
    async fn add_schema(&self, schema: CollectionSchema) -> Result<()>;

    /// Create a document, deriving its vector field, and return its id.
    async fn create(&self, collection: &str, document: NewDocument) -> Result<String>;

    /// Run a similarity query, ordered by descending similarity.
    async fn search(&self, collection: &str, query: &SimilarityQuery)
        -> Result<Vec<SimilarityMatch>>;

    /// Number of documents in a collection.
    async fn count(&self, collection: &str) -> Result<usize>;
}
