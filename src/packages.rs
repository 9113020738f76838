//! Enumeration of package checkouts under the packages directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Names of the package directories under `dir`, sorted case-insensitively
/// (ties broken byte-wise, so the listing is fully deterministic). Hidden
/// entries and plain files are skipped.
pub fn directories(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read packages directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        if entry.path().is_dir() {
            names.push(name);
        }
    }

    names.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sorted_case_insensitively_without_files_or_hidden_dirs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::create_dir(dir.path().join("Alpha")).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("stray.txt"), "").unwrap();

        let names = directories(dir.path()).unwrap();
        assert_eq!(names, vec!["Alpha", "beta"]);
    }

    #[test]
    fn test_missing_directory_names_the_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = directories(&missing).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
