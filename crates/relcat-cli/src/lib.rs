//! relcat - query a published release catalog
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
//!
//! Loads a release index (remote URL or local JSON file), annotates every
//! release with sort keys and download links, and answers version queries:
//!
//! ```text
//! relcat --source https://example.org/releases.json majors
//! relcat --source releases.json --bits 64 latest
//! relcat --source releases.json releases 6 1
//! ```

pub mod cmd;
pub mod ui;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use relcat_core::{BitFilter, CatalogOptions, ReleaseCatalog, Source};

#[derive(Debug, Parser)]
#[command(name = "relcat")]
#[command(author, version = env!("RELCAT_VERSION"), about = "relcat - query a release catalog")]
pub struct Cli {
    /// Release index location: http(s) URL or path to a JSON file
    #[arg(long, short, global = true, env = "RELCAT_SOURCE")]
    pub source: Option<Source>,

    /// Package name used in download filenames
    #[arg(long, global = true, env = "RELCAT_PACKAGE", default_value = "octave")]
    pub package: String,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long, global = true, env = "RELCAT_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Restrict to 32 or 64 bit builds; any other value means all
    #[arg(long, short, global = true, default_value = "all")]
    pub bits: BitFilter,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List architecture names
    Archs,
    /// List major versions
    Majors,
    /// List minor versions of a major version
    Minors {
        /// Major version
        major: u32,
    },
    /// List patch versions of a major.minor version
    Patches {
        /// Major version
        major: u32,
        /// Minor version
        minor: u32,
    },
    /// List build numbers of a major.minor.patch version
    Builds {
        /// Major version
        major: u32,
        /// Minor version
        minor: u32,
        /// Patch version
        patch: u32,
    },
    /// Show the latest release and its downloads
    Latest,
    /// List releases, optionally narrowed by version components
    Releases {
        /// Major version
        major: Option<u32>,
        /// Minor version
        minor: Option<u32>,
        /// Patch version
        patch: Option<u32>,
        /// Build number
        build: Option<u32>,
    },
}

impl Cli {
    /// Catalog options derived from the global flags.
    pub fn options(&self) -> CatalogOptions {
        let timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));
        CatalogOptions::for_package(self.package.as_str()).with_timeout(timeout)
    }
}

/// Load the catalog named by `cli` and run its command.
pub async fn run(cli: Cli) -> Result<()> {
    let source = cli
        .source
        .as_ref()
        .context("No release index given. Pass --source or set RELCAT_SOURCE.")?;
    let catalog = ReleaseCatalog::load(source, &cli.options())
        .await
        .with_context(|| format!("Failed to load release catalog from {source}"))?;

    tracing::debug!(command = ?cli.command, bits = %cli.bits, "running command");

    let out = ui::Output::new(cli.json);
    let bits = cli.bits;

    match cli.command {
        Commands::Archs => cmd::versions::archs(&catalog, bits, out),
        Commands::Majors => cmd::versions::majors(&catalog, bits, out),
        Commands::Minors { major } => cmd::versions::minors(&catalog, bits, major, out),
        Commands::Patches { major, minor } => {
            cmd::versions::patches(&catalog, bits, major, minor, out)
        }
        Commands::Builds {
            major,
            minor,
            patch,
        } => cmd::versions::builds(&catalog, bits, major, minor, patch, out),
        Commands::Latest => cmd::latest::latest(&catalog, bits, out),
        Commands::Releases {
            major,
            minor,
            patch,
            build,
        } => {
            let filter = cmd::releases::VersionFilter {
                major,
                minor,
                patch,
                build,
            };
            cmd::releases::releases(&catalog, bits, filter, out)
        }
    }
}
