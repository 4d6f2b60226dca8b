//! Builds the `Location` and `Referer` values of a redirect response.

use crate::domain::entities::{RedirectRecord, RefererPolicy};
use axum::http::{HeaderMap, Uri};
use url::Url;

/// Header set by TLS-terminating proxies to report the original scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Computes where a request is sent for a resolved record.
///
/// Without route preservation the destination is used verbatim. With it, the
/// destination's path and query are replaced by the request's.
///
/// # Errors
///
/// Returns [`url::ParseError`] if the destination does not parse, which can
/// only happen for records that did not come from the record parser.
///
/// # Examples
///
/// ```ignore
/// // record: dest=https://to.test/path?query=string; route=preserve
/// // request: GET /other?key=value
/// assert_eq!(build_location(&record, &uri)?, "https://to.test/other?key=value");
/// ```
pub fn build_location(record: &RedirectRecord, uri: &Uri) -> Result<String, url::ParseError> {
    let mut destination = Url::parse(&record.destination)?;

    if !record.preserve_route {
        return Ok(record.destination.clone());
    }

    destination.set_path(uri.path());
    destination.set_query(uri.query());

    Ok(destination.to_string())
}

/// Computes the `Referer` header for a redirect, if the policy emits one.
///
/// - [`RefererPolicy::None`] - no header
/// - [`RefererPolicy::Host`] - the request host
/// - [`RefererPolicy::Full`] - `scheme://host/path?query` of the original request
pub fn build_referer(
    policy: RefererPolicy,
    host: &str,
    uri: &Uri,
    headers: &HeaderMap,
) -> Option<String> {
    match policy {
        RefererPolicy::None => None,
        RefererPolicy::Host => Some(host.to_string()),
        RefererPolicy::Full => {
            let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
            Some(format!(
                "{}://{}{}",
                request_scheme(headers),
                host,
                path_and_query
            ))
        }
    }
}

/// Scheme the client used, as reported by a fronting proxy; `http` otherwise.
pub fn request_scheme(headers: &HeaderMap) -> &str {
    headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| v.eq_ignore_ascii_case("https") || v.eq_ignore_ascii_case("http"))
        .unwrap_or("http")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn record(destination: &str, preserve_route: bool) -> RedirectRecord {
        RedirectRecord {
            destination: destination.to_string(),
            preserve_route,
            ..RedirectRecord::default()
        }
    }

    #[test]
    fn test_location_verbatim() {
        let uri: Uri = "/path?key=value".parse().unwrap();

        let location = build_location(&record("http://to.test", false), &uri).unwrap();
        assert_eq!(location, "http://to.test");

        let location =
            build_location(&record("https://to.test/path?query=string", false), &uri).unwrap();
        assert_eq!(location, "https://to.test/path?query=string");
    }

    #[test]
    fn test_location_preserves_route() {
        let uri: Uri = "/path?key=value".parse().unwrap();

        let location = build_location(&record("https://to.test", true), &uri).unwrap();
        assert_eq!(location, "https://to.test/path?key=value");

        let location = build_location(&record("http://to.test", true), &uri).unwrap();
        assert_eq!(location, "http://to.test/path?key=value");
    }

    #[test]
    fn test_location_preserve_replaces_existing_route() {
        let uri: Uri = "/otherpath?otherquery=string".parse().unwrap();

        let location =
            build_location(&record("https://to.test/path?query=string", true), &uri).unwrap();
        assert_eq!(location, "https://to.test/otherpath?otherquery=string");
    }

    #[test]
    fn test_location_preserve_without_query_drops_query() {
        let uri: Uri = "/only-path".parse().unwrap();

        let location =
            build_location(&record("https://to.test/path?query=string", true), &uri).unwrap();
        assert_eq!(location, "https://to.test/only-path");
    }

    #[test]
    fn test_location_invalid_destination() {
        let uri: Uri = "/".parse().unwrap();
        assert!(build_location(&record("not a url", false), &uri).is_err());
    }

    #[test]
    fn test_referer_policies() {
        let uri: Uri = "/route?key=value".parse().unwrap();
        let headers = HeaderMap::new();

        assert_eq!(
            build_referer(RefererPolicy::None, "from.test", &uri, &headers),
            None
        );
        assert_eq!(
            build_referer(RefererPolicy::Host, "from.test", &uri, &headers),
            Some("from.test".to_string())
        );
        assert_eq!(
            build_referer(RefererPolicy::Full, "from.test", &uri, &headers),
            Some("http://from.test/route?key=value".to_string())
        );
    }

    #[test]
    fn test_referer_full_behind_tls_proxy() {
        let uri: Uri = "/route".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https, http"));

        assert_eq!(
            build_referer(RefererPolicy::Full, "from.test", &uri, &headers),
            Some("https://from.test/route".to_string())
        );
    }

    #[test]
    fn test_request_scheme_ignores_garbage() {
        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("gopher"));

        assert_eq!(request_scheme(&headers), "http");
    }
}
