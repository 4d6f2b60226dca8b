//! Utility functions for request handling.
//!
//! - [`host`] - Host header extraction and bare-IP detection
//! - [`redirect_target`] - `Location` and `Referer` construction for redirects

pub mod host;
pub mod redirect_target;
