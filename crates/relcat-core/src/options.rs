//! Settings shared by the catalog factories.

use std::time::Duration;

use relcat_schema::PackageName;

use crate::error::CatalogError;

/// Default timeout applied to index retrieval.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options used when loading and annotating a catalog.
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    /// Prefix of every display filename (`<package>-<version>-<suffix>`).
    pub package: PackageName,
    /// Request timeout for remote retrieval. `None` disables the timeout.
    pub timeout: Option<Duration>,
    /// User agent sent with remote requests.
    pub user_agent: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            package: PackageName::default(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: crate::USER_AGENT.to_string(),
        }
    }
}

impl CatalogOptions {
    /// Options for the given package, defaults elsewhere.
    pub fn for_package(package: impl Into<PackageName>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build an HTTP client honoring these options.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Client`] if the TLS backend cannot be initialized.
    pub fn client(&self) -> Result<reqwest::Client, CatalogError> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(CatalogError::Client)
    }
}
