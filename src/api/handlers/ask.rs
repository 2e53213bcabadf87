use crate::{
    types::{AppError, AskRequest, AskResponse, Result},
    AppState,
};
use axum::{body::Bytes, extract::State, Json};

/// Answer a question using retrieved wiki context.
///
/// The body is decoded from raw bytes so clients need not send a
/// `Content-Type` header.
pub async fn ask(State(state): State<AppState>, body: Bytes) -> Result<Json<AskResponse>> {
    let request: AskRequest = serde_json::from_slice(&body)
        .map_err(|_| AppError::InvalidInput("invalid payload".to_string()))?;

    if request.question.trim().is_empty() {
        return Err(AppError::InvalidInput("invalid payload".to_string()));
    }

    let answer = state
        .pipeline
        .answer(&request.question)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Pipeline error"))?;

    Ok(Json(AskResponse { answer }))
}

/// Any method on `/ask` other than POST (OPTIONS is answered by the CORS layer).
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("only POST allowed".to_string())
}
