//! Annotated release records.
//!
//! A [`ReleaseRecord`] is built once from a [`RawRelease`] and never changes:
//! the sort keys and download links are derived at construction and only
//! exposed through shared references.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use relcat_schema::{
    BitWidth, EditionAsset, EditionKind, PackageName, RawRelease, VersionTuple, is_int64_build,
};
use serde::Serialize;
use tracing::debug;

use crate::link::DownloadLink;

/// Integer sort keys derived from a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Sortable {
    /// Inferred pointer width
    pub bits: BitWidth,
    /// First version component
    pub major: u32,
    /// Second version component
    pub minor: u32,
    /// Third version component
    pub patch: u32,
    /// Fourth version component
    pub build: u32,
}

impl Sortable {
    fn derive(version: &str, archname: &str) -> Self {
        let v = VersionTuple::parse(version);
        Self {
            bits: BitWidth::from_archname(archname),
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            build: v.build,
        }
    }

}

/// One published release with its derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseRecord {
    version: String,
    archname: String,
    edition: BTreeMap<EditionKind, EditionAsset>,
    sortable: Sortable,
    links: Vec<DownloadLink>,
}

impl ReleaseRecord {
    /// Annotate a raw index entry.
    ///
    /// Unknown edition keys are dropped. When a key and its alias both appear
    /// (`portable` and `portable-archive`), the first key in map order wins.
    /// Links are built in [`EditionKind::ORDER`], skipping editions without a URL.
    pub fn annotate(raw: RawRelease, package: &PackageName) -> Self {
        let RawRelease {
            version,
            archname,
            edition: raw_editions,
        } = raw;

        let mut edition = BTreeMap::new();
        for (key, asset) in raw_editions {
            match key.parse::<EditionKind>() {
                Ok(kind) => match edition.entry(kind) {
                    Entry::Vacant(slot) => {
                        slot.insert(asset);
                    }
                    Entry::Occupied(_) => {
                        debug!(
                            %version,
                            %archname,
                            edition = %key,
                            "duplicate edition, keeping first"
                        );
                    }
                },
                Err(_) => debug!(%version, %archname, edition = %key, "ignoring unknown edition"),
            }
        }

        let links = EditionKind::ORDER
            .iter()
            .filter_map(|kind| {
                let asset = edition.get(kind)?;
                let link = DownloadLink::new(package, &version, *kind, asset);
                if link.is_none() {
                    debug!(%version, %archname, edition = %kind, "edition has no url, skipping link");
                }
                link
            })
            .collect();

        let sortable = Sortable::derive(&version, &archname);

        Self {
            version,
            archname,
            edition,
            sortable,
            links,
        }
    }

    /// Version string as published.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Architecture name as published.
    pub fn archname(&self) -> &str {
        &self.archname
    }

    /// Known editions of this release, keyed in presentation order.
    pub fn editions(&self) -> &BTreeMap<EditionKind, EditionAsset> {
        &self.edition
    }

    /// Derived sort keys.
    pub fn sortable(&self) -> &Sortable {
        &self.sortable
    }

    /// Download links in presentation order.
    pub fn links(&self) -> &[DownloadLink] {
        &self.links
    }

    /// Inferred pointer width.
    pub fn bits(&self) -> BitWidth {
        self.sortable.bits
    }

    /// Whether this build wins a tie against another build of the same version:
    /// 64-bit builds and 64-bit-integer builds are preferred.
    pub fn is_preferred_build(&self) -> bool {
        self.sortable.bits == BitWidth::Bits64 || is_int64_build(&self.archname)
    }
}
