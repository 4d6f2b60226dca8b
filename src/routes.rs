//! Top-level router configuration for both listeners.
//!
//! # Route Structure
//!
//! Redirect listener:
//! - `*` - every method and path goes to the redirect handler
//!
//! Ask listener:
//! - `GET /ask?domain=<host>` - certificate approval for a TLS proxy
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned if absent and echoed on the response
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;

/// Constructs the redirect router.
pub fn app_router(state: AppState) -> Router {
    with_observability(Router::new().fallback(redirect_handler).with_state(state))
}

/// Constructs the router served on the ask listener.
pub fn ask_router(state: AppState) -> Router {
    with_observability(api::routes::ask_routes().with_state(state))
}

fn with_observability(router: Router) -> Router {
    router
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}
