#![allow(dead_code)]

use async_trait::async_trait;
use srd::application::services::{Resolver, ResolverConfig};
use srd::domain::entities::RedirectRecord;
use srd::domain::repositories::{LookupError, TxtSource};
use srd::infrastructure::cache::{CacheService, MemoryCache};
use srd::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const FALLBACK_URL: &str = "https://github.com/twopow/srd";

/// TXT source answering from a fixed table.
///
/// `_srd.error.test` fails with a lookup error; unknown names have no records.
#[derive(Default)]
pub struct StaticTxtSource {
    records: HashMap<String, Vec<String>>,
    lookups: AtomicUsize,
}

impl StaticTxtSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, name: &str, record: &str) -> Self {
        self.records
            .entry(name.to_string())
            .or_default()
            .push(record.to_string());
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TxtSource for StaticTxtSource {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if name == "_srd.error.test" {
            return Err(LookupError::new(name, "server failure"));
        }

        Ok(self.records.get(name).cloned().unwrap_or_default())
    }
}

/// Records used by the handler tests, keyed as published in DNS.
pub fn default_txt_source() -> StaticTxtSource {
    StaticTxtSource::new()
        .with_record("_srd.success.test", "v=srd1; dest=to.test")
        .with_record(
            "_srd.permanent.test",
            "v=srd1; dest=https://to.test/landing; code=301",
        )
        .with_record(
            "_srd.preserve.test",
            "v=srd1; dest=https://to.test/path?query=string; route=preserve",
        )
        .with_record(
            "_srd.referer-none.test",
            "v=srd1; dest=https://to.test; referer=none",
        )
        .with_record(
            "_srd.referer-full.test",
            "v=srd1; dest=https://to.test; referer=full",
        )
        .with_record("_srd.invalid.test", "v=srd2; dest=https://to.test")
        .with_record("_srd.loop-a.test", "v=srd1; dest=https://loop-b.test")
        .with_record("_srd.loop-b.test", "v=srd1; dest=https://loop-a.test")
}

pub struct TestContext {
    pub state: AppState,
    pub cache: Arc<MemoryCache<RedirectRecord>>,
    pub txt_source: Arc<StaticTxtSource>,
}

pub fn create_test_state() -> TestContext {
    create_test_state_with(default_txt_source())
}

pub fn create_test_state_with(txt_source: StaticTxtSource) -> TestContext {
    let cache = Arc::new(MemoryCache::new(Duration::from_secs(300)));
    let txt_source = Arc::new(txt_source);

    let resolver = Resolver::new(
        ResolverConfig {
            record_prefix: "_srd".to_string(),
            fallback_url: Some(FALLBACK_URL.to_string()),
        },
        cache.clone() as Arc<dyn CacheService<RedirectRecord>>,
        txt_source.clone() as Arc<dyn TxtSource>,
    );

    TestContext {
        state: AppState::new(Arc::new(resolver)),
        cache,
        txt_source,
    }
}
