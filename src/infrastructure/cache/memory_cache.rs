//! In-process cache with sliding expiration and a background sweeper.

use super::service::CacheService;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tracing::{debug, info, warn};

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Entries plus the TTL they are written with, shared with the sweeper task.
struct Store<V> {
    entries: RwLock<HashMap<String, Entry<V>>>,
    ttl: Duration,
}

impl<V: Clone> Store<V> {
    async fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.write().await;
        let now = Instant::now();

        let entry = entries.get_mut(key)?;
        if now >= entry.expires_at {
            debug!(key, "cache expired");
            return None;
        }

        entry.expires_at = now + self.ttl;
        Some(entry.value.clone())
    }

    async fn set(&self, key: &str, value: V) {
        let expires_at = Instant::now() + self.ttl;
        self.entries
            .write()
            .await
            .insert(key.to_string(), Entry { value, expires_at });
    }

    async fn cleanup(&self) -> usize {
        let mut entries = self.entries.write().await;
        let now = Instant::now();

        let before = entries.len();
        entries.retain(|_, entry| now < entry.expires_at);
        let deleted = before - entries.len();

        if deleted > 0 {
            info!(deleted, remaining = entries.len(), "cache cleanup");
        }

        deleted
    }
}

/// Cache backed by a `HashMap` behind a single reader/writer lock.
///
/// Every entry lives for `ttl` after its last write or successful read.
/// Expired entries are never returned, and are physically removed either by
/// [`CacheService::cleanup`] or by the sweeper started with
/// [`MemoryCache::with_sweeper`].
///
/// The sweeper holds the write lock for the whole sweep, which stalls
/// concurrent lookups for large caches; keep the interval coarse.
pub struct MemoryCache<V> {
    store: Arc<Store<V>>,
    shutdown: watch::Sender<bool>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl<V> MemoryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Creates a cache without a background sweeper.
    pub fn new(ttl: Duration) -> Self {
        let (shutdown, _) = watch::channel(false);

        Self {
            store: Arc::new(Store {
                entries: RwLock::new(HashMap::new()),
                ttl,
            }),
            shutdown,
            sweeper: Mutex::new(None),
        }
    }

    /// Creates a cache and spawns a task that sweeps expired entries every
    /// `cleanup_interval`.
    ///
    /// Must be called from within a tokio runtime. The task runs until
    /// [`MemoryCache::shutdown`] is awaited or the cache is dropped.
    pub fn with_sweeper(ttl: Duration, cleanup_interval: Duration) -> Self {
        let mut cache = Self::new(ttl);

        let handle = tokio::spawn(run_sweeper(
            cache.store.clone(),
            cleanup_interval,
            cache.shutdown.subscribe(),
        ));
        *cache.sweeper.get_mut() = Some(handle);

        debug!(?ttl, ?cleanup_interval, "cache sweeper started");
        cache
    }

    /// Whether a sweeper task is attached and still running.
    pub async fn is_sweeping(&self) -> bool {
        self.sweeper
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stops the sweeper and waits for it to finish.
    ///
    /// Calling this more than once, or on a cache without a sweeper, is a no-op.
    pub async fn shutdown(&self) {
        let _ = self.shutdown.send(true);

        let handle = self.sweeper.lock().await.take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!("Cache sweeper ended abnormally: {}", e);
            }
            info!("Cache sweeper stopped");
        }
    }
}

impl<V> Drop for MemoryCache<V> {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn run_sweeper<V: Clone>(
    store: Arc<Store<V>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = interval_at(Instant::now() + period, period);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                store.cleanup().await;
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }
}

#[async_trait]
impl<V> CacheService<V> for MemoryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<V> {
        self.store.get(key).await
    }

    async fn set(&self, key: &str, value: V) {
        self.store.set(key, value).await
    }

    async fn cleanup(&self) -> usize {
        self.store.cleanup().await
    }

    async fn len(&self) -> usize {
        self.store.entries.read().await.len()
    }
}
