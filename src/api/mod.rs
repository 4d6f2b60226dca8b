//! HTTP layer: handlers, middleware and route composition.
//!
//! # Modules
//!
//! - [`handlers`] - Redirect and ask handlers
//! - [`middleware`] - Request id and tracing middleware
//! - [`routes`] - Route configuration for the ask listener

pub mod handlers;
pub mod middleware;
pub mod routes;
