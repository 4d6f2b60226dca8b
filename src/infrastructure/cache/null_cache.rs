//! No-op cache implementation for testing or disabled caching.

use super::service::CacheService;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Every lookup misses and every write is discarded. All operations succeed
/// immediately for any argument.
///
/// # Use Cases
///
/// - Deployments that want every request resolved against DNS
/// - Testing scenarios where caching should be bypassed
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V> CacheService<V> for NullCache
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, _key: &str) -> Option<V> {
        None
    }

    async fn set(&self, _key: &str, _value: V) {}

    async fn cleanup(&self) -> usize {
        0
    }

    async fn len(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_misses() {
        let cache = NullCache::new();

        CacheService::<String>::set(&cache, "key", "value".to_string()).await;
        assert_eq!(CacheService::<String>::get(&cache, "key").await, None);
        assert_eq!(CacheService::<String>::get(&cache, "").await, None);
        assert_eq!(CacheService::<String>::cleanup(&cache).await, 0);
        assert!(CacheService::<String>::is_empty(&cache).await);
    }
}
