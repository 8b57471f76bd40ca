//! Hierarchical version queries over an immutable set of releases.
//!
//! Every query narrows the previous level: `major_releases` filters the
//! bit-filtered set, `minor_releases` filters `major_releases`, and so on.
//! The numeric listings are always derived from the record listing one level
//! up, so the two views cannot disagree.

use std::collections::BTreeSet;

use relcat_schema::{BitFilter, BitWidth, EditionKind, PackageName, RawRelease};
use tracing::debug;

use crate::error::CatalogError;
use crate::record::{ReleaseRecord, Sortable};

/// Ordered, read-only collection of annotated releases.
#[derive(Debug, Clone)]
pub struct ReleaseCatalog {
    releases: Vec<ReleaseRecord>,
    archnames: BTreeSet<String>,
    editions: BTreeSet<EditionKind>,
    bit_widths: [BitWidth; 2],
}

impl Default for ReleaseCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ReleaseCatalog {
    /// Build a catalog from already-annotated records, keeping their order.
    pub fn new(releases: Vec<ReleaseRecord>) -> Self {
        let archnames = releases.iter().map(|r| r.archname().to_string()).collect();
        let editions = releases
            .iter()
            .flat_map(|r| r.editions().keys().copied())
            .collect();
        Self {
            releases,
            archnames,
            editions,
            bit_widths: BitWidth::ALL,
        }
    }

    /// Annotate raw index entries and build a catalog from them.
    pub fn from_raw(raw: Vec<RawRelease>, package: &PackageName) -> Self {
        let releases: Vec<ReleaseRecord> = raw
            .into_iter()
            .map(|r| ReleaseRecord::annotate(r, package))
            .collect();
        debug!(count = releases.len(), %package, "annotated releases");
        Self::new(releases)
    }

    /// All releases in catalog order.
    pub fn releases(&self) -> &[ReleaseRecord] {
        &self.releases
    }

    /// Number of releases.
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Whether the catalog holds no releases.
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// The fixed bit-width domain.
    pub fn bit_widths(&self) -> [BitWidth; 2] {
        self.bit_widths
    }

    /// Distinct editions seen across all releases, in presentation order.
    pub fn edition_kinds(&self) -> Vec<EditionKind> {
        self.editions.iter().copied().collect()
    }

    /// Distinct archnames, sorted.
    ///
    /// `bits` is accepted for symmetry with the other queries but does not
    /// filter anything: callers get every archname regardless of width.
    pub fn archnames(&self, bits: impl Into<BitFilter>) -> Vec<&str> {
        let _: BitFilter = bits.into();
        self.archnames.iter().map(String::as_str).collect()
    }

    /// Releases whose version string matches `version` exactly.
    pub fn find(&self, version: &str) -> Vec<&ReleaseRecord> {
        self.releases
            .iter()
            .filter(|r| r.version() == version)
            .collect()
    }

    /// Releases passing the bit filter. `All` (or any out-of-domain number)
    /// returns everything.
    pub fn bit_width_filter(&self, bits: impl Into<BitFilter>) -> Vec<&ReleaseRecord> {
        let bits = bits.into();
        self.releases
            .iter()
            .filter(|r| bits.matches(r.bits()))
            .collect()
    }

    /// Releases of the given major version.
    pub fn major_releases(&self, bits: impl Into<BitFilter>, major: u32) -> Vec<&ReleaseRecord> {
        narrow(self.bit_width_filter(bits), |s| s.major == major)
    }

    /// Releases of the given major.minor version.
    pub fn minor_releases(
        &self,
        bits: impl Into<BitFilter>,
        major: u32,
        minor: u32,
    ) -> Vec<&ReleaseRecord> {
        narrow(self.major_releases(bits, major), |s| s.minor == minor)
    }

    /// Releases of the given major.minor.patch version.
    pub fn patch_releases(
        &self,
        bits: impl Into<BitFilter>,
        major: u32,
        minor: u32,
        patch: u32,
    ) -> Vec<&ReleaseRecord> {
        narrow(self.minor_releases(bits, major, minor), |s| s.patch == patch)
    }

    /// Releases of the given major.minor.patch.build version.
    pub fn build_releases(
        &self,
        bits: impl Into<BitFilter>,
        major: u32,
        minor: u32,
        patch: u32,
        build: u32,
    ) -> Vec<&ReleaseRecord> {
        narrow(self.patch_releases(bits, major, minor, patch), |s| {
            s.build == build
        })
    }

    /// Distinct major versions, ascending.
    pub fn major_versions(&self, bits: impl Into<BitFilter>) -> Vec<u32> {
        distinct(&self.bit_width_filter(bits), |s| s.major)
    }

    /// Distinct minor versions within `major`, ascending.
    pub fn minor_versions(&self, bits: impl Into<BitFilter>, major: u32) -> Vec<u32> {
        distinct(&self.major_releases(bits, major), |s| s.minor)
    }

    /// Distinct patch versions within `major.minor`, ascending.
    pub fn patch_versions(&self, bits: impl Into<BitFilter>, major: u32, minor: u32) -> Vec<u32> {
        distinct(&self.minor_releases(bits, major, minor), |s| s.patch)
    }

    /// Distinct build numbers within `major.minor.patch`, ascending.
    pub fn build_versions(
        &self,
        bits: impl Into<BitFilter>,
        major: u32,
        minor: u32,
        patch: u32,
    ) -> Vec<u32> {
        distinct(&self.patch_releases(bits, major, minor, patch), |s| s.build)
    }

    /// Resolve the latest release.
    ///
    /// The highest major is picked first, then the highest minor within that
    /// major, then patch, then build. When several releases share the
    /// resolved version, 64-bit (or 64-bit-integer) builds win; remaining ties
    /// go to the first release in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no release passes `bits`.
    pub fn latest(&self, bits: impl Into<BitFilter>) -> Result<&ReleaseRecord, CatalogError> {
        let bits = bits.into();
        let not_found = || CatalogError::NotFound { bits };

        let major = highest(&self.major_versions(bits)).ok_or_else(not_found)?;
        let minor = highest(&self.minor_versions(bits, major)).ok_or_else(not_found)?;
        let patch = highest(&self.patch_versions(bits, major, minor)).ok_or_else(not_found)?;
        let build = highest(&self.build_versions(bits, major, minor, patch)).ok_or_else(not_found)?;

        let candidates = self.build_releases(bits, major, minor, patch, build);
        let chosen = candidates
            .iter()
            .find(|r| r.is_preferred_build())
            .or_else(|| candidates.first())
            .copied()
            .ok_or_else(not_found)?;

        debug!(
            %bits,
            version = chosen.version(),
            archname = chosen.archname(),
            candidates = candidates.len(),
            "resolved latest release"
        );
        Ok(chosen)
    }
}

fn narrow<'a>(
    releases: Vec<&'a ReleaseRecord>,
    keep: impl Fn(&Sortable) -> bool,
) -> Vec<&'a ReleaseRecord> {
    releases
        .into_iter()
        .filter(|r| keep(r.sortable()))
        .collect()
}

fn distinct(releases: &[&ReleaseRecord], key: impl Fn(&Sortable) -> u32) -> Vec<u32> {
    let values: BTreeSet<u32> = releases.iter().map(|r| key(r.sortable())).collect();
    values.into_iter().collect()
}

fn highest(values: &[u32]) -> Option<u32> {
    values.last().copied()
}
