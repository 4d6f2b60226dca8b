//! Domain layer: redirect records and how they are obtained.
//!
//! # Architecture
//!
//! - [`entities`] - Redirect record and its policy enums
//! - [`record_parser`] - TXT record grammar (`v=srd1; dest=...`)
//! - [`repositories`] - Trait for TXT record sources
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. [`repositories::TxtSource`] is implemented in
//! `crate::infrastructure::dns`.

pub mod entities;
pub mod record_parser;
pub mod repositories;
