//! Business logic services for the application layer.

pub mod loop_detector;
pub mod resolver_service;

pub use resolver_service::{ResolveError, Resolver, ResolverConfig};
