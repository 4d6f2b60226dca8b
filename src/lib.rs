//! # srd
//!
//! An HTTP redirector driven by DNS TXT records, built with Axum and hickory.
//!
//! A request for `old.example.com` is answered from the TXT record published
//! at `_srd.old.example.com`:
//!
//! ```text
//! _srd.old.example.com. TXT "v=srd1; dest=https://new.example.com; code=301; route=preserve"
//! ```
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Redirect records, record grammar and the TXT source trait
//! - **Application Layer** ([`application`]) - Resolution and loop detection
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory cache and DNS access
//! - **API Layer** ([`api`]) - Redirect and ask handlers, middleware
//!
//! ## Features
//!
//! - Status code, route preservation and referer policy chosen per record
//! - Sliding-TTL in-memory cache with a background sweeper
//! - Single-hop redirect loop detection
//! - On-demand TLS approval endpoint for a fronting proxy
//!
//! ## Quick Start
//!
//! ```bash
//! export FALLBACK_URL="https://github.com/twopow/srd"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ResolveError, Resolver, ResolverConfig};
    pub use crate::domain::entities::{RedirectRecord, RedirectStatus, RefererPolicy};
    pub use crate::domain::repositories::{LookupError, TxtSource};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
    pub use crate::state::AppState;
}
