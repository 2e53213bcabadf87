//! Embedded in-process document store.
//!
//! Documents live in memory behind a `parking_lot::RwLock`. Each collection's
//! vector field is computed on create by the embedding provider named in its
//! schema; similarity search is an exhaustive cosine ranking.

use super::traits::{
    CollectionSchema, DocumentStore, EmbeddingField, NewDocument, SimilarityMatch,
    SimilarityQuery,
};
use crate::rag::embeddings::Embedder;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredDocument {
    id: String,
    text: String,
    category: String,
    text_v: Vec<f32>,
}

struct Collection {
    schema: CollectionSchema,
    /// Fixed by the first document inserted
    dimensions: Option<usize>,
    documents: Vec<StoredDocument>,
}

/// In-memory [`DocumentStore`] with provider-derived vector fields.
pub struct EmbeddedStore {
    providers: HashMap<String, Arc<dyn Embedder>>,
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl EmbeddedStore {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register an embedding provider under its `provider_name()`.
    pub fn with_provider(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.providers
            .insert(embedder.provider_name().to_string(), embedder);
        self
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot_product / (norm_a * norm_b)
    }

    fn embedding_input(field: &EmbeddingField, document: &NewDocument) -> Result<String> {
        let parts = field
            .source_fields
            .iter()
            .map(|name| {
                document.field(name).ok_or_else(|| {
                    AppError::Database(format!(
                        "Embedding source field '{}' does not exist",
                        name
                    ))
                })
            })
            .collect::<Result<Vec<&str>>>()?;
        Ok(parts.join(" "))
    }
}

impl Default for EmbeddedStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for EmbeddedStore {
    async fn add_schema(&self, schema: CollectionSchema) -> Result<()> {
        if !self.providers.contains_key(&schema.embedding.provider) {
            return Err(AppError::Database(format!(
                "Unknown embedding provider '{}' for field '{}'",
                schema.embedding.provider, schema.embedding.name
            )));
        }

        for source in &schema.embedding.source_fields {
            if !schema.fields.contains(source) {
                return Err(AppError::Database(format!(
                    "Embedding source field '{}' is not declared in collection '{}'",
                    source, schema.name
                )));
            }
        }

        let mut collections = self.collections.write();
        if collections.contains_key(&schema.name) {
            return Err(AppError::Database(format!(
                "Collection '{}' already exists",
                schema.name
            )));
        }

        tracing::debug!(
            collection = %schema.name,
            vector_field = %schema.embedding.name,
            provider = %schema.embedding.provider,
            model = %schema.embedding.model,
            "Schema registered"
        );

        collections.insert(
            schema.name.clone(),
            Collection {
                schema,
                dimensions: None,
                documents: Vec::new(),
            },
        );
        Ok(())
    }

    async fn create(&self, collection: &str, document: NewDocument) -> Result<String> {
        // Clone the field definition so no lock is held across the embedding call
        let field = {
            let collections = self.collections.read();
            let col = collections.get(collection).ok_or_else(|| {
                AppError::Database(format!("Collection '{}' not found", collection))
            })?;
            col.schema.embedding.clone()
        };

        let embedder = self.providers.get(&field.provider).ok_or_else(|| {
            AppError::Database(format!("Unknown embedding provider '{}'", field.provider))
        })?;

        let input = Self::embedding_input(&field, &document)?;
        let text_v = embedder.embed(&field.model, &input).await?;
        if text_v.is_empty() {
            return Err(AppError::Embedding(format!(
                "Provider '{}' returned an empty vector",
                field.provider
            )));
        }

        let mut collections = self.collections.write();
        let col = collections
            .get_mut(collection)
            .ok_or_else(|| AppError::Database(format!("Collection '{}' not found", collection)))?;

        match col.dimensions {
            Some(expected) if expected != text_v.len() => {
                return Err(AppError::Database(format!(
                    "Dimension mismatch in '{}': expected {}, got {}",
                    collection,
                    expected,
                    text_v.len()
                )));
            }
            Some(_) => {}
            None => col.dimensions = Some(text_v.len()),
        }

        let id = Uuid::new_v4().to_string();
        col.documents.push(StoredDocument {
            id: id.clone(),
            text: document.text,
            category: document.category,
            text_v,
        });

        Ok(id)
    }

    async fn search(
        &self,
        collection: &str,
        query: &SimilarityQuery,
    ) -> Result<Vec<SimilarityMatch>> {
        let collections = self.collections.read();
        let col = collections
            .get(collection)
            .ok_or_else(|| AppError::Database(format!("Collection '{}' not found", collection)))?;

        if let Some(expected) = col.dimensions {
            if expected != query.vector.len() {
                return Err(AppError::Database(format!(
                    "Query vector has {} dimensions, collection '{}' has {}",
                    query.vector.len(),
                    collection,
                    expected
                )));
            }
        }

        let mut results: Vec<SimilarityMatch> = col
            .documents
            .iter()
            .filter_map(|doc| {
                let similarity = Self::cosine_similarity(&query.vector, &doc.text_v);
                if similarity > query.threshold {
                    Some(SimilarityMatch {
                        id: doc.id.clone(),
                        text: doc.text.clone(),
                        category: doc.category.clone(),
                        similarity,
                    })
                } else {
                    None
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(query.limit);

        Ok(results)
    }

    async fn count(&self, collection: &str) -> Result<usize> {
        let collections = self.collections.read();
        collections
            .get(collection)
            .map(|col| col.documents.len())
            .ok_or_else(|| AppError::Database(format!("Collection '{}' not found", collection)))
    }
}
