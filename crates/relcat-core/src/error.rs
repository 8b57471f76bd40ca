//! Errors surfaced by catalog construction and queries.

use std::path::PathBuf;

use relcat_schema::BitFilter;
use thiserror::Error;

/// Failure while building or querying a [`ReleaseCatalog`](crate::ReleaseCatalog).
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The remote index could not be retrieved (transport error or non-2xx status).
    #[error("failed to retrieve release index from {url}: {source}")]
    Retrieval {
        /// Location that was requested
        url: String,
        /// Underlying HTTP error
        #[source]
        source: reqwest::Error,
    },

    /// A local index file could not be read.
    #[error("failed to read release index {}: {source}", .path.display())]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a JSON array of release records.
    #[error("invalid release index: {0}")]
    Parse(#[from] serde_json::Error),

    /// No release resolves for the requested bit filter.
    #[error("no release found (bits: {bits})")]
    NotFound {
        /// Filter the lookup ran under
        bits: BitFilter,
    },
}
