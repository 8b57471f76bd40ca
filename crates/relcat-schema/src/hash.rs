//! SHA256 checksums carried by release editions.

use serde::{Deserialize, Serialize};

/// Newtype for a SHA256 hash string as published in the release index.
///
/// Stored as-is: the index is trusted data and a malformed hash only affects
/// what gets displayed next to a download link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Sha256Hash(String);

impl Sha256Hash {
    /// Create a new `Sha256Hash` without validation.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Return the inner hex string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the index carried no hash at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First `len` characters, for compact display.
    pub fn short(&self, len: usize) -> &str {
        self.0.get(..len).unwrap_or(&self.0)
    }
}

impl std::fmt::Display for Sha256Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Sha256Hash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Sha256Hash {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Sha256Hash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "ABCDEF1234567890abcdef1234567890abcdef1234567890abcdef1234567890";

    #[test]
    fn short_prefix() {
        let hash = Sha256Hash::new(GOOD);
        assert_eq!(hash.short(8), "ABCDEF12");
        assert_eq!(Sha256Hash::new("ab").short(8), "ab");
        assert!(Sha256Hash::default().is_empty());
    }

    #[test]
    fn transparent_serde() {
        let hash: Sha256Hash = serde_json::from_str("\"deadbeef\"").unwrap();
        assert_eq!(hash.as_str(), "deadbeef");
        assert_eq!(serde_json::to_string(&hash).unwrap(), "\"deadbeef\"");
    }
}
