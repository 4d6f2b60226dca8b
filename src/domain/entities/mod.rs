//! Core domain entities.
//!
//! - [`RedirectRecord`] - Resolved redirect instructions for one hostname
//! - [`RedirectStatus`] - HTTP status used for the redirect
//! - [`RefererPolicy`] - What to send in the `Referer` header

pub mod redirect_record;

pub use redirect_record::{RedirectRecord, RedirectStatus, RefererPolicy};
