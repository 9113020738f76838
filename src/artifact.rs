//! On-disk JSON artifacts shared between the utilities.
//!
//! Both artifacts are flat string→string objects: the package→URL mapping
//! written by `extract-urls` and the package→license record written by
//! `extract-licenses`. `BTreeMap` keeps the serialized form key-sorted, so
//! repeated runs over the same inputs produce identical files.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Package name → repository URL.
pub type UrlMapping = BTreeMap<String, String>;

/// Package name → license identifier (or `"Unknown"`).
pub type LicenseRecord = BTreeMap<String, String>;

pub fn load(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn save(path: &Path, map: &BTreeMap<String, String>) -> Result<()> {
    let json = serde_json::to_string_pretty(map)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
