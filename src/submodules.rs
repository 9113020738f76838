//! Batch registration of mapped packages as git submodules.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::artifact;
use crate::catalog;
use crate::git;

/// Add every mapped package as a submodule under `packages_dir`, skipping
/// the known-duplicate names. Runs against the repository containing the
/// current directory. Returns the number of failed additions; failures
/// never abort the batch.
pub async fn run(mapping_path: &Path, packages_dir: &Path) -> Result<usize> {
    let mapping = artifact::load(mapping_path)?;

    let packages: Vec<(&String, &String)> = mapping
        .iter()
        .filter(|(name, _)| !catalog::SUBMODULE_SKIP.contains(&name.as_str()))
        .collect();
    let total = packages.len();

    println!("Adding {} packages as git submodules...\n", total);

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut added = 0;
    let mut failed: Vec<(String, String, String)> = Vec::new();

    for (name, url) in packages {
        pb.set_message(name.clone());

        match git::add_submodule(Path::new("."), url, &packages_dir.join(name)).await {
            Ok(()) => {
                pb.println(format!("Adding {}... {}", name, "✓".green()));
                added += 1;
            }
            Err(err) => {
                pb.println(format!("Adding {}... {}", name, "✗".red()));
                failed.push((name.clone(), url.clone(), err.to_string()));
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    println!("\n{}", "=".repeat(60));
    println!("Successfully added: {}/{}", added, total);

    if failed.is_empty() {
        println!("\n{} All submodules added successfully!", "✓".green());
    } else {
        println!("\nFailed ({}):", failed.len());
        for (name, url, error) in &failed {
            println!("\n  {}:", name);
            println!("    URL: {}", url);
            println!("    Error: {}", error);
        }
    }

    Ok(failed.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_mapping_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = run(&dir.path().join("nope.json"), Path::new("pyhc_packages")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_skip_table_filters_known_duplicates() {
        // Only skip-table names in the mapping: nothing to add, no failures.
        let dir = TempDir::new().unwrap();
        let mapping_path = dir.path().join("mapping.json");
        fs::write(
            &mapping_path,
            r#"{
  "NEXRADutils": "https://github.com/space-physics/NEXRAD",
  "WMM2020": "https://github.com/space-physics/wmm2020",
  "astrometry_azel": "https://github.com/space-physics/astrometry_geomap",
  "pytplot": "https://github.com/MAVENSDC/PyTplot"
}"#,
        )
        .unwrap();

        let failures = run(&mapping_path, Path::new("pyhc_packages")).await.unwrap();
        assert_eq!(failures, 0);
    }
}
