//! Hostname helpers: `Host` header extraction, port stripping and bare-IP detection.

use crate::AppError;
use axum::http::{HeaderMap, header};
use regex::Regex;
use std::sync::LazyLock;

/// Dotted-quad IPv4 with an optional numeric port. Octet and port ranges are
/// not checked.
static IP_HOST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}(?::[0-9]+)?$").unwrap());

/// Returns true if `host` is a bare IPv4 address, optionally followed by a port.
///
/// # Examples
///
/// ```ignore
/// assert!(is_ip_host("127.0.0.1:8080"));
/// assert!(!is_ip_host("example.com:80"));
/// ```
pub fn is_ip_host(host: &str) -> bool {
    IP_HOST_REGEX.is_match(host)
}

/// Strips a trailing `:port` from a host, leaving bracketed IPv6 literals intact.
pub fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end_bracket) => &host[..=end_bracket],
            None => host,
        };
    }

    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

/// Extracts the request host from the `Host` header, port included.
///
/// The value is returned as sent: resolution and caching are keyed on the
/// exact host the client asked for.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
pub fn extract_host_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request(
            "Missing Host header",
            serde_json::json!({}),
        ));
    }

    Ok(host.to_string())
}
