//! HTTP request handlers.
//!
//! Each handler module corresponds to one listener's endpoint.

pub mod ask;
pub mod redirect;

pub use ask::ask_handler;
pub use redirect::redirect_handler;
