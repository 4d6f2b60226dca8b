//! Source of DNS TXT records.

use async_trait::async_trait;

/// A TXT lookup that failed for a reason other than the name not existing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to lookup TXT records for {name}: {message}")]
pub struct LookupError {
    pub name: String,
    pub message: String,
}

impl LookupError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Looks up TXT records for a fully qualified name.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::HickoryTxtSource`] - system resolver via hickory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TxtSource: Send + Sync {
    /// Returns the TXT records published under `name`, one string per record.
    ///
    /// The character strings of a single record are concatenated.
    ///
    /// # Returns
    ///
    /// - `Ok(records)` in answer order
    /// - `Ok(vec![])` if the name does not exist or has no TXT data
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] on timeouts, network or server failures.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError>;
}
