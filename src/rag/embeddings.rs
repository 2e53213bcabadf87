use crate::types::Result;
use async_trait::async_trait;

/// Produces dense vectors for text through an external embedding service.
///
/// The model is chosen per call so one provider connection can serve both the
/// document store's derived vector field and query embedding.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single input text with the named model.
    async fn embed(&self, model: &str, input: &str) -> Result<Vec<f32>>;

    /// Name under which this embedder is registered with a document store.
    fn provider_name(&self) -> &str;
}
