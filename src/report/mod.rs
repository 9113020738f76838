//! License table rendering.
//!
//! - [`markdown`] — the pipe-table document the project website embeds.
//! - [`terminal`] — colored tabular output for interactive use.
//!
//! Both render the same prepared [`LicenseTable`]: detected licenses with
//! the manual corrections applied, names normalized, display names
//! resolved, rows sorted case-insensitively by display name.

pub mod markdown;
pub mod terminal;

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

use crate::artifact;
use crate::catalog;
use crate::cli::TableFormat;
use crate::license::normalize;

/// One row of the rendered table.
pub struct Row {
    pub display_name: String,
    pub license: String,
}

/// The fully prepared report.
pub struct LicenseTable {
    pub rows: Vec<Row>,
    /// License → number of packages, sorted by descending count, ties
    /// alphabetical.
    pub counts: Vec<(String, usize)>,
    pub total: usize,
}

/// Load the record at `path` and prepare it for rendering.
pub fn build(path: &Path) -> Result<LicenseTable> {
    let mut record = artifact::load(path)?;

    // Corrections only touch packages already present in the record.
    for (name, license) in catalog::LICENSE_CORRECTIONS {
        if let Some(entry) = record.get_mut(*name) {
            *entry = license.to_string();
        }
    }

    let mut rows: Vec<Row> = record
        .iter()
        .map(|(name, license)| Row {
            display_name: catalog::lookup(catalog::DISPLAY_NAMES, name)
                .map(str::to_string)
                .unwrap_or_else(|| name.clone()),
            license: normalize::normalize(license),
        })
        .collect();
    rows.sort_by_key(|row| row.display_name.to_lowercase());

    let mut freq: HashMap<String, usize> = HashMap::new();
    for row in &rows {
        *freq.entry(row.license.clone()).or_insert(0) += 1;
    }
    let mut counts: Vec<(String, usize)> = freq.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let total = rows.len();
    Ok(LicenseTable { rows, counts, total })
}

/// Render the record at `licenses_path` to stdout in the requested format.
pub fn run(licenses_path: &Path, format: TableFormat) -> Result<()> {
    let table = build(licenses_path)?;
    match format {
        TableFormat::Markdown => markdown::render(&table),
        TableFormat::Terminal => terminal::render(&table),
    }
    Ok(())
}
