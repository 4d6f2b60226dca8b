//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Command-line flags of the `srd` binary are applied on top of it.
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export ASK_LISTEN="127.0.0.1:8081"
//! export FALLBACK_URL="https://github.com/twopow/srd"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Redirect listener address (default: `0.0.0.0:8080`)
//! - `ASK_LISTEN` - Ask endpoint listener address (default: disabled)
//! - `RECORD_PREFIX` - DNS label in front of the host (default: `_srd`)
//! - `FALLBACK_URL` - Redirect target for bare-IP hosts (default: none)
//! - `CACHE_TTL_SECONDS` - Sliding cache TTL (default: 300)
//! - `CACHE_CLEANUP_INTERVAL_SECONDS` - Sweep interval (default: 600)
//! - `CACHE_ENABLED` - `false` disables caching (default: `true`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEBUG` - Forces debug logging (default: `false`)

use anyhow::Result;
use std::env;
use std::time::Duration;
use url::Url;

use crate::application::services::ResolverConfig;
use crate::application::services::resolver_service::DEFAULT_RECORD_PREFIX;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// The ask listener is not started when unset.
    pub ask_listen_addr: Option<String>,
    pub record_prefix: String,
    pub fallback_url: Option<String>,
    pub cache_ttl_seconds: u64,
    pub cache_cleanup_interval_seconds: u64,
    /// When false, every request is resolved against DNS.
    pub cache_enabled: bool,
    pub log_level: String,
    pub log_format: String,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            ask_listen_addr: None,
            record_prefix: DEFAULT_RECORD_PREFIX.to_string(),
            fallback_url: None,
            cache_ttl_seconds: 300,
            cache_cleanup_interval_seconds: 600,
            cache_enabled: true,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparseable numeric and boolean values fall back to defaults;
    /// [`Config::validate`] catches the rest.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let ask_listen_addr = non_empty_var("ASK_LISTEN");
        let record_prefix = env::var("RECORD_PREFIX").unwrap_or(defaults.record_prefix);
        let fallback_url = non_empty_var("FALLBACK_URL");

        let cache_ttl_seconds = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.cache_ttl_seconds);

        let cache_cleanup_interval_seconds = env::var("CACHE_CLEANUP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.cache_cleanup_interval_seconds);

        let cache_enabled = env::var("CACHE_ENABLED")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.cache_enabled);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let debug = env::var("DEBUG")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.debug);

        Ok(Self {
            listen_addr,
            ask_listen_addr,
            record_prefix,
            fallback_url,
            cache_ttl_seconds,
            cache_cleanup_interval_seconds,
            cache_enabled,
            log_level,
            log_format,
            debug,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` or `ask_listen_addr` has no port
    /// - `record_prefix` is empty
    /// - `fallback_url` is not an absolute URL
    /// - cache TTL or cleanup interval is zero
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        validate_listen_addr("LISTEN", &self.listen_addr)?;

        if let Some(ref ask) = self.ask_listen_addr {
            validate_listen_addr("ASK_LISTEN", ask)?;
        }

        if self.record_prefix.trim().is_empty() {
            anyhow::bail!("RECORD_PREFIX must not be empty");
        }

        if let Some(ref fallback) = self.fallback_url
            && let Err(e) = Url::parse(fallback)
        {
            anyhow::bail!("FALLBACK_URL is not a valid URL ('{}'): {}", fallback, e);
        }

        if self.cache_ttl_seconds == 0 {
            anyhow::bail!("CACHE_TTL_SECONDS must be greater than 0");
        }

        if self.cache_cleanup_interval_seconds == 0 {
            anyhow::bail!("CACHE_CLEANUP_INTERVAL_SECONDS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    pub fn cache_cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cache_cleanup_interval_seconds)
    }

    /// Resolver settings derived from this configuration.
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            record_prefix: self.record_prefix.clone(),
            fallback_url: self.fallback_url.clone(),
        }
    }

    /// Tracing filter directive: `debug` when the debug switch is on.
    pub fn log_filter(&self) -> &str {
        if self.debug { "debug" } else { &self.log_level }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.ask_listen_addr {
            Some(ref ask) => tracing::info!("  Ask listen address: {}", ask),
            None => tracing::info!("  Ask endpoint: disabled"),
        }
        tracing::info!("  Record prefix: {}", self.record_prefix);
        tracing::info!(
            "  Fallback URL: {}",
            self.fallback_url.as_deref().unwrap_or("none")
        );

        if self.cache_enabled {
            tracing::info!(
                "  Cache: enabled (ttl {}s, cleanup every {}s)",
                self.cache_ttl_seconds,
                self.cache_cleanup_interval_seconds
            );
        } else {
            tracing::info!("  Cache: disabled");
        }

        tracing::info!("  Log level: {}", self.log_filter());
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn validate_listen_addr(key: &str, addr: &str) -> Result<()> {
    let port = addr.rsplit_once(':').map(|(_, port)| port);

    if !matches!(port, Some(p) if p.parse::<u16>().is_ok()) {
        anyhow::bail!("{} must be in format 'host:port', got '{}'", key, addr);
    }

    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
