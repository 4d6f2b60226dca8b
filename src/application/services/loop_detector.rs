//! Single-hop redirect loop detection.
//!
//! A freshly resolved record is rejected when the host it points at is itself
//! a cached redirect source. Only that one hop is examined: longer chains are
//! not walked, and a destination that has never been resolved looks exactly
//! like a terminal one.

use crate::domain::entities::RedirectRecord;
use crate::infrastructure::cache::CacheService;

/// Host component of a destination in cache-key form (`host` or `host:port`).
///
/// The authority is taken verbatim so it compares like a raw `Host` header:
/// case is kept, and so is an explicit port even when it is the scheme's
/// default. Userinfo is dropped.
///
/// Returns `None` for destinations without a `scheme://` authority.
pub fn destination_host(destination: &str) -> Option<String> {
    let (_, rest) = destination.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    (!host.is_empty()).then(|| host.to_string())
}

/// Returns the destination host if it is a cached redirect source.
///
/// The probe goes through [`CacheService::get`], so a hit also refreshes the
/// destination entry's deadline.
pub async fn find_loop(
    cache: &dyn CacheService<RedirectRecord>,
    destination: &str,
) -> Option<String> {
    let host = destination_host(destination)?;
    cache.get(&host).await.map(|_| host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::{MemoryCache, NullCache};
    use std::time::Duration;

    fn cached_source() -> RedirectRecord {
        RedirectRecord {
            hostname: "b.test".to_string(),
            destination: "http://c.test".to_string(),
            ..RedirectRecord::default()
        }
    }

    #[test]
    fn test_destination_host() {
        assert_eq!(destination_host("http://to.test"), Some("to.test".to_string()));
        assert_eq!(
            destination_host("https://to.test/path?query=string"),
            Some("to.test".to_string())
        );
        assert_eq!(
            destination_host("http://to.test:8080/"),
            Some("to.test:8080".to_string())
        );
        assert_eq!(destination_host("not a url"), None);
        assert_eq!(destination_host("http:///path"), None);
        assert_eq!(
            destination_host("https://user:pw@to.test:8443/path"),
            Some("to.test:8443".to_string())
        );
        assert_eq!(
            destination_host("https://to.test?next=https://x.test/"),
            Some("to.test".to_string())
        );
    }

    #[test]
    fn test_destination_host_is_verbatim() {
        assert_eq!(destination_host("https://B.test/"), Some("B.test".to_string()));
        assert_eq!(
            destination_host("https://c.test:443/"),
            Some("c.test:443".to_string())
        );
    }

    #[tokio::test]
    async fn test_loop_found_when_destination_cached() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set("b.test", cached_source()).await;

        let found = find_loop(&cache, "https://b.test/landing").await;
        assert_eq!(found, Some("b.test".to_string()));
    }

    #[tokio::test]
    async fn test_no_loop_for_uncached_destination() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set("b.test", cached_source()).await;

        assert_eq!(find_loop(&cache, "https://elsewhere.test").await, None);
    }

    #[tokio::test]
    async fn test_port_is_part_of_the_key() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set("b.test:8080", cached_source()).await;

        assert_eq!(find_loop(&cache, "http://b.test").await, None);
        assert_eq!(
            find_loop(&cache, "http://b.test:8080").await,
            Some("b.test:8080".to_string())
        );
    }

    #[tokio::test]
    async fn test_loop_matches_case_and_default_port() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set("B.test", cached_source()).await;
        cache.set("c.test:443", cached_source()).await;

        assert_eq!(
            find_loop(&cache, "https://B.test/").await,
            Some("B.test".to_string())
        );
        assert_eq!(
            find_loop(&cache, "https://c.test:443/").await,
            Some("c.test:443".to_string())
        );
        assert_eq!(find_loop(&cache, "https://c.test/").await, None);
    }

    #[tokio::test]
    async fn test_never_loops_without_cache() {
        let cache = NullCache::new();
        assert_eq!(find_loop(&cache, "http://b.test").await, None);
    }
}
