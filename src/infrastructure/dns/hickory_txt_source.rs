//! TXT record lookups backed by `hickory-resolver`.

use crate::domain::repositories::{LookupError, TxtSource};
use async_trait::async_trait;
use hickory_resolver::TokioResolver;
use tracing::{debug, info};

/// [`TxtSource`] that queries DNS through a hickory [`TokioResolver`].
///
/// Timeouts and retries are whatever the resolver options (read from the
/// system configuration) specify; nothing is layered on top.
pub struct HickoryTxtSource {
    resolver: TokioResolver,
}

impl HickoryTxtSource {
    /// Builds a resolver from the system configuration (`/etc/resolv.conf` on Unix).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the system configuration cannot be read.
    pub fn from_system_conf() -> Result<Self, LookupError> {
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| LookupError::new("<system>", format!("failed to create resolver: {e}")))?
            .build();

        info!("DNS resolver initialised from system configuration");
        Ok(Self::new(resolver))
    }

    pub fn new(resolver: TokioResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl TxtSource for HickoryTxtSource {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        debug!(name, "querying TXT records");

        match self.resolver.txt_lookup(name).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .map(|txt| {
                    txt.txt_data()
                        .iter()
                        .map(|part| String::from_utf8_lossy(part))
                        .collect::<String>()
                })
                .collect()),
            Err(e) if e.is_no_records_found() => {
                debug!(name, "no TXT records");
                Ok(Vec::new())
            }
            Err(e) => Err(LookupError::new(name, e.to_string())),
        }
    }
}
