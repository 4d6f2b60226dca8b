//! Hostname resolution: cache, DNS TXT lookup, parsing and loop checks.

use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use super::loop_detector::find_loop;
use crate::domain::entities::RedirectRecord;
use crate::domain::record_parser::{ParseError, parse_record};
use crate::domain::repositories::{LookupError, TxtSource};
use crate::infrastructure::cache::CacheService;
use crate::utils::host::{is_ip_host, strip_port};

/// Default DNS label prepended to a hostname to find its record.
pub const DEFAULT_RECORD_PREFIX: &str = "_srd";

/// Reasons a hostname could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The destination host is itself a cached redirect source.
    #[error("loop detected")]
    Loop { host: String },

    /// The TXT record exists but is not a valid redirect record.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] ParseError),

    /// DNS failed for a reason other than the record not existing.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Settings consumed by [`Resolver`].
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Label placed in front of the hostname, e.g. `_srd` → `_srd.example.com`.
    pub record_prefix: String,
    /// Where requests addressed to a bare IP are sent, if anywhere.
    pub fallback_url: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            record_prefix: DEFAULT_RECORD_PREFIX.to_string(),
            fallback_url: None,
        }
    }
}

/// Resolves incoming hostnames to redirect records.
///
/// Holds no mutable state of its own: one instance behind an `Arc` serves all
/// concurrent requests, sharing the cache.
///
/// # Resolution Steps
///
/// 1. Bare IP host with a fallback configured → fallback record, nothing else
/// 2. Cache hit → cached record, trusted as-is
/// 3. TXT lookup of `<prefix>.<host>`; no record → not-found record
/// 4. Parse the first TXT record
/// 5. Reject the record if its destination host is a cached source
/// 6. Cache the record under the incoming hostname
///
/// Any failure after step 1 aborts the remaining steps and nothing is cached.
/// There are no retries.
pub struct Resolver {
    config: ResolverConfig,
    cache: Arc<dyn CacheService<RedirectRecord>>,
    txt_source: Arc<dyn TxtSource>,
}

impl Resolver {
    /// Creates a new resolver.
    pub fn new(
        config: ResolverConfig,
        cache: Arc<dyn CacheService<RedirectRecord>>,
        txt_source: Arc<dyn TxtSource>,
    ) -> Self {
        Self {
            config,
            cache,
            txt_source,
        }
    }

    /// Resolves `hostname` (as sent in the `Host` header, port included).
    ///
    /// # Returns
    ///
    /// - `Ok(record)` with `not_found == false` for a redirect
    /// - `Ok(record)` with `not_found == true` if no TXT record exists
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Loop`] if the destination host is a cached source
    /// - [`ResolveError::InvalidRecord`] if the TXT record does not parse
    /// - [`ResolveError::Lookup`] on DNS failures
    pub async fn resolve(&self, hostname: &str) -> Result<RedirectRecord, ResolveError> {
        let started = Instant::now();

        if let Some(fallback) = &self.config.fallback_url
            && is_ip_host(hostname)
        {
            info!(hostname, "no host base redirect");
            return Ok(RedirectRecord::fallback(fallback));
        }

        if let Some(cached) = self.cache.get(hostname).await {
            log_resolved(hostname, &cached, true, started);
            return Ok(cached);
        }

        let record = self.fetch(hostname).await?;

        if !record.not_found
            && let Some(host) = find_loop(self.cache.as_ref(), &record.destination).await
        {
            warn!(hostname, destination_host = %host, "loop detected");
            return Err(ResolveError::Loop { host });
        }

        self.cache.set(hostname, record.clone()).await;
        log_resolved(hostname, &record, false, started);

        Ok(record)
    }

    /// DNS name holding the record for `hostname`.
    pub fn record_name(&self, hostname: &str) -> String {
        format!("{}.{}", self.config.record_prefix, strip_port(hostname))
    }

    async fn fetch(&self, hostname: &str) -> Result<RedirectRecord, ResolveError> {
        let name = self.record_name(hostname);

        let records = self.txt_source.lookup_txt(&name).await.map_err(|e| {
            error!(hostname, error = %e, "failed to resolve host");
            e
        })?;

        let Some(raw) = records.first() else {
            info!(hostname, "no records found");
            return Ok(RedirectRecord::not_found());
        };

        let record = parse_record(raw).map_err(|e| {
            info!(hostname, error = %e, "failed to parse record");
            e
        })?;

        Ok(record.for_host(hostname))
    }
}

fn log_resolved(hostname: &str, record: &RedirectRecord, cached: bool, started: Instant) {
    info!(
        hostname,
        to = %record.destination,
        cached,
        not_found = record.not_found,
        elapsed_ms = started.elapsed().as_millis() as u64,
        preserve_route = record.preserve_route,
        code = record.status.as_u16(),
        referer_policy = %record.referer_policy,
        "resolved host"
    );
}
