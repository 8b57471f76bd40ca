//! Version-number listings, one level at a time

use anyhow::Result;
use relcat_core::{BitFilter, ReleaseCatalog};

use crate::ui::Output;

/// List architecture names. The bit filter does not narrow this list.
pub fn archs(catalog: &ReleaseCatalog, bits: BitFilter, out: Output) -> Result<()> {
    out.list(&catalog.archnames(bits))
}

/// List major versions
pub fn majors(catalog: &ReleaseCatalog, bits: BitFilter, out: Output) -> Result<()> {
    out.list(&catalog.major_versions(bits))
}

/// List minor versions of `major`
pub fn minors(catalog: &ReleaseCatalog, bits: BitFilter, major: u32, out: Output) -> Result<()> {
    out.list(&catalog.minor_versions(bits, major))
}

/// List patch versions of `major.minor`
pub fn patches(
    catalog: &ReleaseCatalog,
    bits: BitFilter,
    major: u32,
    minor: u32,
    out: Output,
) -> Result<()> {
    out.list(&catalog.patch_versions(bits, major, minor))
}

/// List build numbers of `major.minor.patch`
pub fn builds(
    catalog: &ReleaseCatalog,
    bits: BitFilter,
    major: u32,
    minor: u32,
    patch: u32,
    out: Output,
) -> Result<()> {
    out.list(&catalog.build_versions(bits, major, minor, patch))
}
