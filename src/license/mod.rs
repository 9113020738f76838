//! License detection and the `extract-licenses` driver.
//!
//! - [`patterns`] — the ordered, case-insensitive table of license text
//!   patterns, most specific first.
//! - [`detector`] — probes a package's license file, `pyproject.toml`,
//!   and `setup.py` in that order and degrades to `Unknown` instead of
//!   failing.
//! - [`normalize`] — exact-match cleanup of textual license-name variants
//!   for reporting.

pub mod detector;
pub mod normalize;
pub mod patterns;

use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::artifact;
use crate::packages;
use patterns::PatternTable;

/// Detect a license for every package under `packages_dir` and persist the
/// record to `output`.
pub fn run(packages_dir: &Path, output: &Path) -> Result<()> {
    let patterns = PatternTable::new()?;
    let names = packages::directories(packages_dir)?;

    let pb = ProgressBar::new(names.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut record = artifact::LicenseRecord::new();
    for name in names {
        pb.set_message(name.clone());
        let license = detector::detect_license(&packages_dir.join(&name), &patterns);
        pb.println(format!("{}: {}", name, license));
        record.insert(name, license);
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    artifact::save(output, &record)?;
    println!("\nResults saved to {}", output.display());
    Ok(())
}
