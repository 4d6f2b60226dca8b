//! Caching layer for resolved redirect records.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MemoryCache`] - In-process cache with sliding TTL and periodic sweep
//! - [`NullCache`] - No-op implementation for testing/disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::CacheService;
