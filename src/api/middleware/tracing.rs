//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::{Request, header};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use super::request_id::REQUEST_ID_HEADER;

type MakeSpanFn = fn(&Request<Body>) -> Span;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates a span at `INFO` level with:
///   - HTTP method
///   - URI
///   - `Host` header
///   - Request id (set by [`super::request_id::set_layer`])
///
/// **On Response:**
/// - Logs at `INFO` level with:
///   - Status code
///   - Latency in milliseconds
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/docs host=old.example.com request_id=5f0c...}: finished processing request latency=3 ms status=301
/// ```
pub fn layer()
-> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpanFn, DefaultOnRequest, DefaultOnResponse>
{
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpanFn)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(request: &Request<Body>) -> Span {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        host,
        request_id,
    )
}
