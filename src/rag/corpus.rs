//! Corpus ingestion from newline-delimited JSON.

use crate::db::{DocumentStore, NewDocument};
use crate::types::{AppError, Result, WikiArticle};
use std::path::Path;
use std::time::Instant;

/// Load `{text, category}` records from `path` into `collection`.
///
/// Each record's text is prefixed with `document_prefix` before the create
/// mutation. The first unreadable file, malformed record, or store error
/// aborts the load. Returns the number of documents created.
pub async fn load_corpus(
    store: &dyn DocumentStore,
    collection: &str,
    path: &Path,
    document_prefix: &str,
) -> Result<usize> {
    let start = Instant::now();

    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::Corpus(format!("Failed to read '{}': {}", path.display(), e))
    })?;

    let mut created = 0;
    let records = serde_json::Deserializer::from_str(&content).into_iter::<WikiArticle>();
    for (index, record) in records.enumerate() {
        let article = record.map_err(|e| {
            AppError::Corpus(format!(
                "Malformed record {} in '{}': {}",
                index + 1,
                path.display(),
                e
            ))
        })?;

        let document = NewDocument::new(
            format!("{}{}", document_prefix, article.text),
            article.category,
        );
        store.create(collection, document).await?;
        created += 1;

        if created % 100 == 0 {
            tracing::debug!(documents = created, "Corpus load progress");
        }
    }

    tracing::info!(
        path = %path.display(),
        collection = %collection,
        documents = created,
        duration_ms = start.elapsed().as_millis() as u64,
        "Corpus loaded"
    );

    Ok(created)
}
