//! Presentation-ready download descriptors.

use relcat_schema::{EditionAsset, EditionKind, PackageName, Sha256Hash};
use serde::Serialize;

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with binary (1024) units and one decimal place.
///
/// The unit is chosen after rounding, so a value that would print as
/// `1024.0` moves up to the next unit instead.
///
/// # Example
///
/// ```
/// use relcat_core::readable_size;
///
/// assert_eq!(readable_size(0), "0.0 B");
/// assert_eq!(readable_size(1536), "1.5 KB");
/// ```
pub fn readable_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while unit < UNITS.len() - 1 && (value * 10.0).round() / 10.0 >= 1024.0 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// One downloadable file of a release, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadLink {
    /// Edition this link belongs to
    pub edition: EditionKind,
    /// Download URL
    pub url: String,
    /// `<package>-<version>-<suffix>`
    pub filename: String,
    /// Short label (e.g. "Installer")
    pub label: &'static str,
    /// SHA256 as published (empty if the index had none)
    pub sha256: Sha256Hash,
    /// Size in bytes, if published
    pub size: Option<u64>,
    /// Human-readable size, if published
    pub readable_size: Option<String>,
}

impl DownloadLink {
    /// Build the link for one edition. Returns `None` when the edition has no URL.
    pub fn new(
        package: &PackageName,
        version: &str,
        edition: EditionKind,
        asset: &EditionAsset,
    ) -> Option<Self> {
        let url = asset.download_url()?;
        Some(Self {
            edition,
            url: url.to_string(),
            filename: format!("{package}-{version}-{}", edition.suffix()),
            label: edition.label(),
            sha256: asset.sha256.clone().unwrap_or_default(),
            size: asset.size,
            readable_size: asset.size.map(readable_size),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_size_units() {
        assert_eq!(readable_size(0), "0.0 B");
        assert_eq!(readable_size(1023), "1023.0 B");
        assert_eq!(readable_size(1024), "1.0 KB");
        assert_eq!(readable_size(1_048_575), "1.0 MB");
        assert_eq!(readable_size(1_048_524), "1023.9 KB");
        assert_eq!(readable_size(1536), "1.5 KB");
        assert_eq!(readable_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(readable_size(1_073_741_824), "1.0 GB");
        assert_eq!(readable_size(1 << 40), "1.0 TB");
        assert_eq!(readable_size(1 << 60), "1.0 EB");
    }

    #[test]
    fn link_from_asset() {
        let asset = EditionAsset {
            url: Some("https://example.org/octave-6.1.0-w64.7z".to_string()),
            sha256: Some(Sha256Hash::new("abc")),
            size: Some(2048),
        };
        let link =
            DownloadLink::new(&PackageName::default(), "6.1.0", EditionKind::Portable, &asset)
                .unwrap();
        assert_eq!(link.filename, "octave-6.1.0-64bit-portable");
        assert_eq!(link.label, "Portable");
        assert_eq!(link.sha256.as_str(), "abc");
        assert_eq!(link.readable_size.as_deref(), Some("2.0 KB"));
    }

    #[test]
    fn no_url_no_link() {
        let asset = EditionAsset {
            size: Some(10),
            ..EditionAsset::default()
        };
        assert!(
            DownloadLink::new(&PackageName::default(), "1", EditionKind::Installer, &asset)
                .is_none()
        );
    }
}
