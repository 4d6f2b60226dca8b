//! Handler for on-demand TLS certificate approval.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::state::AppState;
use crate::utils::host::is_ip_host;

#[derive(Debug, Deserialize)]
pub struct AskParams {
    pub domain: Option<String>,
}

/// Tells a TLS-terminating proxy whether to obtain a certificate for a domain.
///
/// # Endpoint
///
/// `GET /ask?domain=<host>`
///
/// # Responses
///
/// - 200 `ok` if the domain has a usable redirect record
/// - 400 `domain is required` if the parameter is missing or empty
/// - 400 `ip address not allowed` for bare IPv4 hosts
/// - 400 `rejected` for anything else, resolution errors included
pub async fn ask_handler(
    State(state): State<AppState>,
    Query(params): Query<AskParams>,
) -> impl IntoResponse {
    let Some(domain) = params.domain.filter(|d| !d.trim().is_empty()) else {
        return (StatusCode::BAD_REQUEST, "domain is required");
    };
    let domain = domain.trim();

    if is_ip_host(domain) {
        debug!(domain, "ask rejected ip address");
        return (StatusCode::BAD_REQUEST, "ip address not allowed");
    }

    match state.resolver.resolve(domain).await {
        Ok(record) if !record.not_found => {
            info!(domain, "ask approved");
            (StatusCode::OK, "ok")
        }
        Ok(_) => {
            info!(domain, "ask rejected");
            (StatusCode::BAD_REQUEST, "rejected")
        }
        Err(e) => {
            info!(domain, error = %e, "ask rejected");
            (StatusCode::BAD_REQUEST, "rejected")
        }
    }
}
