//! Route configuration for the ask listener.

use crate::api::handlers::ask_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes served on the ask listener.
///
/// # Endpoints
///
/// - `GET /ask?domain=<host>` - Certificate approval for a TLS proxy
pub fn ask_routes() -> Router<AppState> {
    Router::new().route("/ask", get(ask_handler))
}
