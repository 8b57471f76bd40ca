//! relcat core: annotated release records, hierarchical version queries and
//! the tab controller used by the download page.

pub mod catalog;
pub mod error;
pub mod fetch;
pub mod link;
pub mod options;
pub mod record;
pub mod tabs;

pub use catalog::ReleaseCatalog;
pub use error::CatalogError;
pub use fetch::Source;
pub use link::{DownloadLink, readable_size};
pub use options::CatalogOptions;
pub use record::{ReleaseRecord, Sortable};
pub use relcat_schema::{BitFilter, BitWidth, EditionKind, PackageName};

/// User Agent string for index retrieval
pub const USER_AGENT: &str = concat!("relcat-core/", env!("CARGO_PKG_VERSION"));
