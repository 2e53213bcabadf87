#![allow(dead_code)]

pub mod mocks;

use mocks::{MockEmbedder, MockLLMClient};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use wikirag::{startup, AppState, ProviderClients, WikiRagConfig};

pub const WIKI_LINES: &[&str] = &[
    r#"{"text": "Paris is the capital of France.", "category": "geography"}"#,
    r#"{"text": "Rust is a systems programming language.", "category": "technology"}"#,
    r#"{"text": "The Nile is a river in Africa.", "category": "geography"}"#,
];

/// Write JSONL lines to a temporary corpus file.
pub fn corpus_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp corpus");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write corpus line");
    }
    file
}

/// Build application state from mocks over the standard three-article corpus.
///
/// The temp file must outlive startup only, but is returned so callers can
/// keep it around if they reload.
pub async fn test_state(
    embedder: Arc<MockEmbedder>,
    llm: Arc<MockLLMClient>,
) -> (AppState, NamedTempFile) {
    let corpus = corpus_file(WIKI_LINES);

    let mut config = WikiRagConfig::default();
    config.corpus.path = corpus.path().to_path_buf();

    let state = startup::initialize_with_clients(config, ProviderClients { llm, embedder })
        .await
        .expect("Failed to initialize test state");

    (state, corpus)
}
