//! HTTP API Handlers and Routes
//!
//! Built on the Axum web framework.
//!
//! # API Endpoints
//!
//! - `POST /ask` - `{"question": string}` → `{"answer": string}`
//! - `OPTIONS /ask` - CORS preflight, empty body
//! - `GET /health` - literal `ok`
//!
//! Every `/ask` response carries `Content-Type: application/json` and
//! `Access-Control-Allow-Origin: *`. Errors are returned as `{"error": msg}`
//! with 400 (bad payload), 405 (wrong method) or 500 (pipeline failure).

/// Request handlers for each endpoint.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
