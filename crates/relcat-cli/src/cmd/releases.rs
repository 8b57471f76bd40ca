//! Releases command

use anyhow::{Result, bail};
use relcat_core::{BitFilter, ReleaseCatalog, ReleaseRecord};

use crate::ui::Output;

/// Version components given on the command line, outermost first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionFilter {
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
    pub build: Option<u32>,
}

impl VersionFilter {
    /// Run the narrowest record query the given components allow.
    pub fn select<'a>(
        self,
        catalog: &'a ReleaseCatalog,
        bits: BitFilter,
    ) -> Result<Vec<&'a ReleaseRecord>> {
        let records = match (self.major, self.minor, self.patch, self.build) {
            (None, None, None, None) => catalog.bit_width_filter(bits),
            (Some(major), None, None, None) => catalog.major_releases(bits, major),
            (Some(major), Some(minor), None, None) => catalog.minor_releases(bits, major, minor),
            (Some(major), Some(minor), Some(patch), None) => {
                catalog.patch_releases(bits, major, minor, patch)
            }
            (Some(major), Some(minor), Some(patch), Some(build)) => {
                catalog.build_releases(bits, major, minor, patch, build)
            }
            _ => bail!("Version components must be given outermost first"),
        };
        Ok(records)
    }
}

/// List releases matching `filter`
pub fn releases(
    catalog: &ReleaseCatalog,
    bits: BitFilter,
    filter: VersionFilter,
    out: Output,
) -> Result<()> {
    let records = filter.select(catalog, bits)?;
    out.releases(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relcat_core::CatalogOptions;

    fn catalog() -> ReleaseCatalog {
        let json = r#"[
            { "version": "6.1.0", "archname": "w64" },
            { "version": "6.1.0", "archname": "w32" },
            { "version": "6.2.0", "archname": "w64" },
            { "version": "7.1.0", "archname": "w64" }
        ]"#;
        ReleaseCatalog::from_json(json, &CatalogOptions::default()).unwrap()
    }

    #[test]
    fn narrows_by_given_components() {
        let cat = catalog();
        let all = VersionFilter::default();
        assert_eq!(all.select(&cat, BitFilter::All).unwrap().len(), 4);

        let six = VersionFilter {
            major: Some(6),
            ..VersionFilter::default()
        };
        assert_eq!(six.select(&cat, BitFilter::All).unwrap().len(), 3);
        assert_eq!(six.select(&cat, BitFilter::from_u32(64)).unwrap().len(), 2);

        let six_one = VersionFilter {
            major: Some(6),
            minor: Some(1),
            patch: Some(0),
            build: Some(0),
        };
        assert_eq!(six_one.select(&cat, BitFilter::All).unwrap().len(), 2);
    }

    #[test]
    fn gaps_are_rejected() {
        let cat = catalog();
        let gap = VersionFilter {
            major: Some(6),
            patch: Some(0),
            ..VersionFilter::default()
        };
        assert!(gap.select(&cat, BitFilter::All).is_err());
    }
}
