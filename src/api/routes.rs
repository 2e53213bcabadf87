use crate::api::handlers;
use crate::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

pub fn create_router(state: AppState) -> Router {
    // Answers every OPTIONS request on /ask itself, with no body
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let ask_routes = Router::new()
        .route(
            "/ask",
            post(handlers::ask::ask).fallback(handlers::ask::method_not_allowed),
        )
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(ask_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
