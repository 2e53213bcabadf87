//! One-time initialization run before the server accepts requests.

use crate::db::{CollectionSchema, DocumentStore, EmbeddedStore};
use crate::llm::{Provider, ProviderClients};
use crate::rag::{corpus::load_corpus, RagPipeline};
use crate::types::{AppError, Result};
use crate::utils::config::WikiRagConfig;
use crate::AppState;
use std::sync::Arc;

/// Connect to the configured provider and build the application state.
pub async fn initialize(config: WikiRagConfig) -> Result<AppState> {
    let provider = Provider::from_config(&config.provider)?;
    tracing::info!(
        provider = provider.name(),
        base_url = %config.provider.base_url,
        chat_model = %config.models.chat,
        embedding_model = %config.models.embedding,
        "Connecting to model provider"
    );
    let clients = provider.connect(&config.models.chat)?;
    initialize_with_clients(config, clients).await
}

/// Register the schema, load the corpus and assemble the pipeline.
///
/// Any failure here is a startup failure; nothing is served until this
/// returns successfully.
pub async fn initialize_with_clients(
    config: WikiRagConfig,
    clients: ProviderClients,
) -> Result<AppState> {
    let provider_name = clients.embedder.provider_name().to_string();
    let store = Arc::new(EmbeddedStore::new().with_provider(clients.embedder.clone()));

    store
        .add_schema(CollectionSchema::wiki(
            &config.corpus.collection,
            &provider_name,
            &config.models.embedding,
        ))
        .await?;

    let loaded = load_corpus(
        store.as_ref(),
        &config.corpus.collection,
        &config.corpus.path,
        &config.retrieval.document_prefix,
    )
    .await?;

    if loaded == 0 {
        tracing::warn!(path = %config.corpus.path.display(), "Corpus is empty");
    }

    let pipeline = RagPipeline::new(
        clients.embedder,
        clients.llm,
        store,
        config.corpus.collection.clone(),
        config.models.embedding.clone(),
        config.retrieval.clone(),
    );

    Ok(AppState {
        config: Arc::new(config),
        pipeline: Arc::new(pipeline),
    })
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.bind_address();
    let app = crate::api::routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Configuration(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(address = %addr, "Knowledge base initialized, HTTP API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    let ctrl_c = wait_for_signal("Ctrl-C", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = wait_for_signal("SIGTERM", async {
        let mut signal =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
        signal.recv().await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Resolve when `signal` fires. A handler that cannot be installed never
/// resolves, so it cannot trigger shutdown on its own.
async fn wait_for_signal<F>(name: &str, signal: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, signal = name, "Failed to install signal handler");
        std::future::pending::<()>().await;
    }
}
