//! Wire types shared by the relcat crates.
//!
//! Everything in here is plain data: the raw release records as they appear
//! in the published JSON, the fixed edition set, bit-width inference and the
//! four-part version tuple used for ranking.

pub mod arch;
pub mod hash;
pub mod types;
pub mod version;

// Re-exports
pub use arch::*;
pub use hash::Sha256Hash;
pub use types::*;
pub use version::VersionTuple;
