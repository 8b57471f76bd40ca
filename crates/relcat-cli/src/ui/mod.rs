//! Terminal output: plain text for people, JSON for scripts.

use anyhow::Result;
use crossterm::style::Stylize;
use relcat_core::{DownloadLink, ReleaseRecord};
use serde::Serialize;

/// Output mode chosen by `--json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// One value per line, or a JSON array.
    pub fn list<T: Serialize + std::fmt::Display>(self, values: &[T]) -> Result<()> {
        if self.json {
            return print_json(&values);
        }
        for value in values {
            println!("{value}");
        }
        Ok(())
    }

    /// A single release with its downloads.
    pub fn release(self, record: &ReleaseRecord) -> Result<()> {
        if self.json {
            return print_json(record);
        }
        print_release(record);
        Ok(())
    }

    /// A sequence of releases.
    pub fn releases(self, records: &[&ReleaseRecord]) -> Result<()> {
        if self.json {
            return print_json(&records);
        }
        if records.is_empty() {
            println!("  No matching releases.");
            return Ok(());
        }
        for record in records {
            print_release(record);
        }
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_release(record: &ReleaseRecord) {
    let lw = 12;
    let bits = record.bits();
    println!();
    println!(
        "  {} {}",
        record.version().white().bold(),
        format!("({}, {bits}-bit)", record.archname()).dark_grey()
    );
    if record.links().is_empty() {
        println!("  {:<lw$}{}", "downloads", "none".dark_grey());
    }
    for link in record.links() {
        print_link(link, lw);
    }
}

fn print_link(link: &DownloadLink, lw: usize) {
    let size = link.readable_size.as_deref().unwrap_or("?");
    println!("  {:<lw$}{}  {}", link.label, link.filename, size.dark_grey());
    println!("  {:<lw$}{}", "", link.url.as_str().dark_grey());
    if !link.sha256.is_empty() {
        println!("  {:<lw$}sha256 {}", "", link.sha256.short(16).dark_grey());
    }
}
