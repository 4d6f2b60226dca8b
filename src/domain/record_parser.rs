//! Parser for redirect TXT records.
//!
//! A record is a list of `key=value` clauses separated by semicolons:
//!
//! ```text
//! v=srd1; dest=https://example.com; code=301; route=preserve; referer=full
//! ```
//!
//! Unknown keys are ignored so newer records stay readable by older servers.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::domain::entities::{RedirectRecord, RedirectStatus, RefererPolicy};

/// A leading `scheme://`, as opposed to `://` appearing later in a path or query.
static SCHEME_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").unwrap());

/// The only record protocol version this server understands.
pub const RECORD_VERSION: &str = "srd1";

/// Reasons a TXT record cannot be turned into a redirect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid version")]
    InvalidVersion,

    #[error("no destination found")]
    NoDestination,

    #[error("invalid destination: {0}")]
    InvalidDestination(String),
}

impl ParseError {
    /// The record that stands in for an unparseable one.
    pub fn not_found_record(&self) -> RedirectRecord {
        RedirectRecord::not_found()
    }
}

/// Parses a raw TXT record into a [`RedirectRecord`].
///
/// Bounding double quotes are stripped. A destination without a scheme gets
/// `http://` prepended before it is validated.
///
/// # Errors
///
/// - [`ParseError::InvalidVersion`] if `v` is missing or not [`RECORD_VERSION`]
/// - [`ParseError::NoDestination`] if `dest` is missing or empty
/// - [`ParseError::InvalidDestination`] if `dest` does not parse as a URL
///
/// On error no partially built record escapes; callers that need a record use
/// [`ParseError::not_found_record`].
pub fn parse_record(raw: &str) -> Result<RedirectRecord, ParseError> {
    let mut record = RedirectRecord::default();

    for clause in raw.trim_matches('"').split(';') {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }

        let (key, value) = match clause.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (clause, ""),
        };

        match key {
            "v" => record.version = value.to_string(),
            "dest" => record.destination = value.to_string(),
            "code" => record.status = parse_status(value),
            "route" => {
                if value == "preserve" {
                    record.preserve_route = true;
                }
            }
            "referer" | "referrer" => record.referer_policy = parse_referer_policy(value),
            _ => {}
        }
    }

    if record.version != RECORD_VERSION {
        return Err(ParseError::InvalidVersion);
    }

    if record.destination.is_empty() {
        return Err(ParseError::NoDestination);
    }

    if !SCHEME_PREFIX_REGEX.is_match(&record.destination) {
        record.destination = format!("http://{}", record.destination);
    }

    Url::parse(&record.destination)
        .map_err(|e| ParseError::InvalidDestination(e.to_string()))?;

    Ok(record)
}

/// Maps a `code` value to a status, falling back to 302.
fn parse_status(code: &str) -> RedirectStatus {
    match code {
        "301" => RedirectStatus::MovedPermanently,
        "302" => RedirectStatus::Found,
        "307" => RedirectStatus::TemporaryRedirect,
        "308" => RedirectStatus::PermanentRedirect,
        _ => RedirectStatus::Found,
    }
}

fn parse_referer_policy(policy: &str) -> RefererPolicy {
    match policy {
        "none" => RefererPolicy::None,
        "host" => RefererPolicy::Host,
        "full" => RefererPolicy::Full,
        _ => RefererPolicy::default(),
    }
}
