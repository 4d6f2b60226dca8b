//! Application layer services.
//!
//! Services combine the cache, the TXT source and the record parser into the
//! operations HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::resolver_service::Resolver`] - Hostname to redirect record
//! - [`services::loop_detector`] - Single-hop loop check used by the resolver

pub mod services;
