//! Wire types of the release index: records, editions and package names.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::hash::Sha256Hash;

/// One element of the published release index (e.g. `releases.json`).
///
/// This is the wire shape only. Derived fields (sort keys, download links)
/// are computed by the consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawRelease {
    /// Dotted version string (e.g. "6.1.0")
    pub version: String,

    /// Architecture or build variant (e.g. "w64", "w32", "w64-64")
    pub archname: String,

    /// Downloadable editions keyed by edition name. Unknown keys are kept
    /// here and ignored later.
    #[serde(default)]
    pub edition: BTreeMap<String, EditionAsset>,
}

/// A single downloadable file of a release.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EditionAsset {
    /// Download URL. Editions without one are not offered for download.
    #[serde(default)]
    pub url: Option<String>,

    /// SHA256 checksum
    #[serde(default)]
    pub sha256: Option<Sha256Hash>,

    /// Size in bytes. Accepts a JSON number or a numeric string.
    #[serde(default, deserialize_with = "deserialize_size")]
    pub size: Option<u64>,
}

impl EditionAsset {
    /// The URL, if present and non-empty.
    pub fn download_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

fn deserialize_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSize {
        Number(u64),
        Text(String),
    }

    match Option::<RawSize>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawSize::Number(n)) => Ok(Some(n)),
        Some(RawSize::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("Invalid size: '{s}'"))),
    }
}

/// The fixed set of editions a release can be published in.
///
/// Declaration order is the presentation order of download links, and the
/// derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditionKind {
    /// Windows installer executable
    Installer,
    /// Portable archive (unpack and run)
    #[serde(alias = "portable-archive")]
    Portable,
    /// Portable archive bundled with the scientific package set
    #[serde(alias = "scientific-archive")]
    Scientific,
    /// Plain archive
    #[serde(alias = "plain-archive")]
    Archive,
}

impl EditionKind {
    /// All editions in presentation order.
    pub const ORDER: [Self; 4] = [
        Self::Installer,
        Self::Portable,
        Self::Scientific,
        Self::Archive,
    ];

    /// Key used in the index JSON.
    pub fn key(self) -> &'static str {
        match self {
            Self::Installer => "installer",
            Self::Portable => "portable",
            Self::Scientific => "scientific",
            Self::Archive => "archive",
        }
    }

    /// Fixed suffix appended to `<package>-<version>-` in display filenames.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Installer => "64bit-installer",
            Self::Portable => "64bit-portable",
            Self::Scientific => "64bit-scientific",
            Self::Archive => "64bit-archive",
        }
    }

    /// Short human label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Installer => "Installer",
            Self::Portable => "Portable",
            Self::Scientific => "Scientific",
            Self::Archive => "Archive",
        }
    }
}

impl std::fmt::Display for EditionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for EditionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "installer" => Ok(Self::Installer),
            "portable" | "portable-archive" => Ok(Self::Portable),
            "scientific" | "scientific-archive" => Ok(Self::Scientific),
            "archive" | "plain-archive" => Ok(Self::Archive),
            _ => Err(format!("Unknown edition: {s}")),
        }
    }
}

/// A normalized package name, used as the prefix of display filenames.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackageName(String);

impl PackageName {
    /// Create a new package name, normalizing the input to lowercase.
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// Return the normalized name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PackageName {
    fn default() -> Self {
        Self::new("octave")
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PackageName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PackageName {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_index_entry() {
        let json = r#"{
            "version": "6.1.0",
            "archname": "w64",
            "edition": {
                "installer": { "url": "https://example.org/o.exe", "sha256": "ab", "size": 1024 },
                "portable": { "url": "https://example.org/o.7z", "size": "2048" },
                "docs": { "url": "https://example.org/doc.pdf" }
            }
        }"#;
        let raw: RawRelease = serde_json::from_str(json).unwrap();
        assert_eq!(raw.version, "6.1.0");
        assert_eq!(raw.edition.len(), 3);
        assert_eq!(raw.edition["installer"].size, Some(1024));
        assert_eq!(raw.edition["portable"].size, Some(2048));
        assert_eq!(raw.edition["portable"].sha256, None);
    }

    #[test]
    fn missing_edition_is_empty() {
        let raw: RawRelease =
            serde_json::from_str(r#"{ "version": "1", "archname": "w32" }"#).unwrap();
        assert!(raw.edition.is_empty());
    }

    #[test]
    fn bad_size_is_rejected() {
        let json = r#"{ "version": "1", "archname": "w32",
            "edition": { "installer": { "size": "big" } } }"#;
        assert!(serde_json::from_str::<RawRelease>(json).is_err());
    }

    #[test]
    fn blank_url_is_not_downloadable() {
        let asset = EditionAsset {
            url: Some("  ".to_string()),
            ..EditionAsset::default()
        };
        assert_eq!(asset.download_url(), None);
    }

    #[test]
    fn edition_order_and_aliases() {
        let mut kinds = vec![
            EditionKind::Archive,
            EditionKind::Installer,
            EditionKind::Scientific,
            EditionKind::Portable,
        ];
        kinds.sort();
        assert_eq!(kinds, EditionKind::ORDER);
        assert_eq!("plain-archive".parse::<EditionKind>(), Ok(EditionKind::Archive));
        assert_eq!("Portable-Archive".parse::<EditionKind>(), Ok(EditionKind::Portable));
        assert!("docs".parse::<EditionKind>().is_err());
    }

    #[test]
    fn package_name_normalizes() {
        assert_eq!(PackageName::new(" Octave ").as_str(), "octave");
        assert_eq!(PackageName::default().as_str(), "octave");
    }
}
