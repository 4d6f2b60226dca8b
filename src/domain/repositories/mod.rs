//! Data source trait definitions for the domain layer.
//!
//! # Available Sources
//!
//! - [`TxtSource`] - DNS TXT record lookups
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod txt_source;

pub use txt_source::{LookupError, TxtSource};

#[cfg(test)]
pub use txt_source::MockTxtSource;
