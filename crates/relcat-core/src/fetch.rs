//! Catalog factories that touch the outside world.
//!
//! Retrieval is a single GET (or file read) followed by one JSON parse. No
//! retries: failures surface to the caller as [`CatalogError`].

use std::path::{Path, PathBuf};

use relcat_schema::RawRelease;
use tracing::{debug, info};

use crate::catalog::ReleaseCatalog;
use crate::error::CatalogError;
use crate::options::CatalogOptions;

/// Where a release index lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// `http://` or `https://` location
    Remote(String),
    /// Local JSON file
    Local(PathBuf),
}

impl std::str::FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty release index location".to_string());
        }
        let lower = s.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Remote(s.to_string()));
        }
        let path = s.strip_prefix("file://").unwrap_or(s);
        Ok(Self::Local(PathBuf::from(path)))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

impl ReleaseCatalog {
    /// Parse a JSON array of release records and annotate it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if `json` is not an array of release records.
    pub fn from_json(json: &str, options: &CatalogOptions) -> Result<Self, CatalogError> {
        let raw: Vec<RawRelease> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw, &options.package))
    }

    /// Read and annotate a local index file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Parse`] if its content is not a valid index.
    pub fn from_path(path: &Path, options: &CatalogOptions) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| read_error(path, source))?;
        Self::from_json(&json, options)
    }

    /// Retrieve and annotate a remote index.
    ///
    /// A non-2xx status is a retrieval failure, not an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Retrieval`] on transport or HTTP status failure
    /// and [`CatalogError::Parse`] if the body is not a valid index.
    pub async fn fetch(
        client: &reqwest::Client,
        url: &str,
        options: &CatalogOptions,
    ) -> Result<Self, CatalogError> {
        let retrieval = |source| CatalogError::Retrieval {
            url: url.to_string(),
            source,
        };

        debug!(url, "requesting release index");
        let body = client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(retrieval)?
            .text()
            .await
            .map_err(retrieval)?;

        Self::from_json(&body, options)
    }

    /// Load from either kind of [`Source`], building an HTTP client from
    /// `options` when needed.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`fetch`](Self::fetch) and
    /// [`from_path`](Self::from_path), plus [`CatalogError::Client`].
    pub async fn load(source: &Source, options: &CatalogOptions) -> Result<Self, CatalogError> {
        let catalog = match source {
            Source::Remote(url) => {
                let client = options.client()?;
                Self::fetch(&client, url, options).await?
            }
            Source::Local(path) => {
                let json = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| read_error(path, source))?;
                Self::from_json(&json, options)?
            }
        };

        info!(%source, releases = catalog.len(), "loaded release catalog");
        Ok(catalog)
    }
}

fn read_error(path: &Path, source: std::io::Error) -> CatalogError {
    CatalogError::Io {
        path: path.to_path_buf(),
        source,
    }
}
