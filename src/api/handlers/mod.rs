//! API request handlers.

/// Question answering handler.
pub mod ask;

/// Liveness check.
pub async fn health() -> &'static str {
    "ok"
}
