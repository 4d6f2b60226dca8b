//! HTTP middleware for request identification and observability.

pub mod request_id;
pub mod tracing;
