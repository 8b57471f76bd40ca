//! Latest command

use anyhow::{Context, Result};
use relcat_core::{BitFilter, ReleaseCatalog};

use crate::ui::Output;

/// Show the latest release for `bits`
pub fn latest(catalog: &ReleaseCatalog, bits: BitFilter, out: Output) -> Result<()> {
    let record = catalog
        .latest(bits)
        .with_context(|| format!("No latest release in a catalog of {}", catalog.len()))?;
    out.release(record)
}
