//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for caching and DNS access.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (in-memory and no-op implementations)
//! - [`dns`] - TXT record lookups backed by hickory

pub mod cache;
pub mod dns;
