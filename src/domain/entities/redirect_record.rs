//! Redirect record entity produced by hostname resolution.

use serde::Serialize;
use std::fmt;

/// Which value is sent as the `Referer` header alongside a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefererPolicy {
    /// No referer header.
    None,
    /// The source hostname only.
    #[default]
    Host,
    /// The full source URL, including path and query.
    Full,
}

impl RefererPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Host => "host",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for RefererPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP status codes a redirect record is allowed to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "u16")]
pub enum RedirectStatus {
    MovedPermanently,
    #[default]
    Found,
    TemporaryRedirect,
    PermanentRedirect,
}

impl RedirectStatus {
    pub fn as_u16(&self) -> u16 {
        match self {
            Self::MovedPermanently => 301,
            Self::Found => 302,
            Self::TemporaryRedirect => 307,
            Self::PermanentRedirect => 308,
        }
    }
}

impl From<RedirectStatus> for u16 {
    fn from(status: RedirectStatus) -> Self {
        status.as_u16()
    }
}

impl From<RedirectStatus> for axum::http::StatusCode {
    fn from(status: RedirectStatus) -> Self {
        match status {
            RedirectStatus::MovedPermanently => Self::MOVED_PERMANENTLY,
            RedirectStatus::Found => Self::FOUND,
            RedirectStatus::TemporaryRedirect => Self::TEMPORARY_REDIRECT,
            RedirectStatus::PermanentRedirect => Self::PERMANENT_REDIRECT,
        }
    }
}

impl fmt::Display for RedirectStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// The result of resolving a hostname.
///
/// A record with `not_found == true` only carries meaningful `hostname` and
/// `status` fields. Every other record has a destination that includes a
/// scheme and parses as a URL.
///
/// `Default` is a builder base for the parser and the named constructors; on
/// its own it satisfies neither shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RedirectRecord {
    pub hostname: String,
    pub destination: String,
    pub preserve_route: bool,
    pub referer_policy: RefererPolicy,
    pub status: RedirectStatus,
    pub not_found: bool,
    pub version: String,
}

impl RedirectRecord {
    /// A record signalling that no redirect exists for a host.
    pub fn not_found() -> Self {
        Self {
            referer_policy: RefererPolicy::None,
            not_found: true,
            ..Self::default()
        }
    }

    /// A record pointing at a fixed URL, used for hosts that are bare IPs.
    pub fn fallback(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            referer_policy: RefererPolicy::None,
            ..Self::default()
        }
    }

    /// Returns the same record attributed to `hostname`.
    pub fn for_host(self, hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..self
        }
    }
}
