//! Four-part numeric versions used for ranking releases.

use serde::{Deserialize, Serialize};

/// Four-part numeric version (`major.minor.patch.build`).
///
/// Parsing never fails: missing components are 0, and a component that is
/// not purely numeric contributes its leading digits.
///
/// # Example
///
/// ```
/// use relcat_schema::VersionTuple;
///
/// let v = VersionTuple::parse("6.1");
/// assert_eq!((v.major, v.minor, v.patch, v.build), (6, 1, 0, 0));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct VersionTuple {
    /// First component
    pub major: u32,
    /// Second component
    pub minor: u32,
    /// Third component
    pub patch: u32,
    /// Fourth component
    pub build: u32,
}

impl VersionTuple {
    /// Parse a dotted version string. Components beyond the fourth are ignored.
    pub fn parse(version: &str) -> Self {
        let trimmed = version.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let mut parts = trimmed.split('.').map(leading_number);

        Self {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            patch: parts.next().unwrap_or(0),
            build: parts.next().unwrap_or(0),
        }
    }
}

fn leading_number(component: &str) -> u32 {
    let end = component
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(component.len());
    component[..end].parse().unwrap_or(0)
}

impl std::fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.build
        )
    }
}
