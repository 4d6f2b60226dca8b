//! Cache service trait.

use async_trait::async_trait;

/// An expiring key/value store keyed by hostname.
///
/// Implementations must be thread-safe. Lookups never fail: a broken or
/// disabled cache behaves like one that always misses.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - in-process store with sliding TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService<V>: Send + Sync
where
    V: Clone + Send + Sync + 'static,
{
    /// Retrieves a value by key.
    ///
    /// # Returns
    ///
    /// - `Some(value)` on a hit; the entry's deadline moves to now + TTL
    /// - `None` if the key is absent or its deadline has passed, even if the
    ///   entry has not been swept yet
    async fn get(&self, key: &str) -> Option<V>;

    /// Stores a value, overwriting any previous entry, with a deadline of
    /// now + TTL.
    async fn set(&self, key: &str, value: V);

    /// Removes every expired entry and returns how many were removed.
    async fn cleanup(&self) -> usize;

    /// Number of entries currently held, expired or not.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
