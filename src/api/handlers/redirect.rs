//! Handler for host-based redirects.

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::error::{AppError, map_resolve_error};
use crate::state::AppState;
use crate::utils::host::extract_host_from_headers;
use crate::utils::redirect_target::{build_location, build_referer};

/// Redirects a request based on the DNS record of its `Host`.
///
/// # Endpoint
///
/// Any method, any path.
///
/// # Request Flow
///
/// 1. Extract the host from the `Host` header (port included)
/// 2. Resolve it through [`crate::application::services::Resolver`]
/// 3. Build `Location` (route preserved if the record asks for it)
/// 4. Build `Referer` according to the record's policy
/// 5. Respond with the record's status code
///
/// # Errors
///
/// - 400 Bad Request if the Host header is missing or invalid
/// - 400 Bad Request if the destination is itself a redirect source
/// - 404 Not Found if the host has no valid record
/// - 500 Internal Server Error on DNS failures
pub async fn redirect_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    let host = extract_host_from_headers(&headers)?;

    let record = state
        .resolver
        .resolve(&host)
        .await
        .map_err(|e| map_resolve_error(&host, e))?;

    if record.not_found {
        debug!(host, "no redirect record");
        return Err(AppError::not_found("Not found", json!({ "host": host })));
    }

    let location = build_location(&record, &uri).map_err(|e| {
        error!(host, destination = %record.destination, error = %e, "invalid destination");
        AppError::internal("Invalid destination", json!({ "host": host }))
    })?;

    let mut response_headers = HeaderMap::new();
    response_headers.insert(header::LOCATION, header_value(&location)?);

    if let Some(referer) = build_referer(record.referer_policy, &host, &uri, &headers) {
        response_headers.insert(header::REFERER, header_value(&referer)?);
    }

    let status = StatusCode::from(record.status);
    Ok((status, response_headers).into_response())
}

fn header_value(value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value)
        .map_err(|_| AppError::internal("Invalid header value", json!({ "value": value })))
}
