//! Cross-check of the persisted mapping against on-disk git remotes.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::artifact;
use crate::git;
use crate::packages;

/// A directory whose git remote disagrees with the mapping.
struct Mismatch {
    name: String,
    git_url: String,
    mapped_url: String,
}

/// Strip the decorations that make equal remotes look different: trailing
/// slashes and the `.git` suffix.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim_end_matches('/');
    url.strip_suffix(".git").unwrap_or(url).to_string()
}

/// Compare every checkout under `packages_dir` against the mapping.
///
/// Each directory lands in exactly one bucket: matched, mismatched, absent
/// from the mapping, or not a repository. Only mismatches are errors; the
/// returned count drives the exit status. The other buckets are purely
/// diagnostic, as are mapping entries with no on-disk directory.
pub async fn run(mapping_path: &Path, packages_dir: &Path) -> Result<usize> {
    let mapping = artifact::load(mapping_path)?;

    println!("Validating package URLs...\n");

    let names = packages::directories(packages_dir)?;

    let mut matches = 0usize;
    let mut mismatches: Vec<Mismatch> = Vec::new();
    let mut not_repositories: Vec<String> = Vec::new();
    let mut unmapped: Vec<(String, String)> = Vec::new();

    for name in &names {
        let Some(git_url) = git::remote_url(&packages_dir.join(name)).await else {
            not_repositories.push(name.clone());
            continue;
        };

        let Some(mapped_url) = mapping.get(name) else {
            unmapped.push((name.clone(), git_url));
            continue;
        };

        if normalize_url(&git_url) == normalize_url(mapped_url) {
            matches += 1;
        } else {
            mismatches.push(Mismatch {
                name: name.clone(),
                git_url,
                mapped_url: mapped_url.clone(),
            });
        }
    }

    println!("{} Matches: {}", "✓".green(), matches);

    if !not_repositories.is_empty() {
        println!(
            "\n{}  Not git repositories ({}):",
            "⚠".yellow(),
            not_repositories.len()
        );
        for name in &not_repositories {
            println!("  - {}", name);
        }
    }

    if !unmapped.is_empty() {
        println!(
            "\n{}  In {} but not in mapping ({}):",
            "⚠".yellow(),
            packages_dir.display(),
            unmapped.len()
        );
        for (name, url) in &unmapped {
            println!("  - {}: {}", name, url);
        }
    }

    if !mismatches.is_empty() {
        println!("\n{} URL mismatches ({}):", "✗".red(), mismatches.len());
        for mismatch in &mismatches {
            println!("\n  {}:", mismatch.name);
            println!("    Git:    {}", mismatch.git_url);
            println!("    Mapped: {}", mismatch.mapped_url);
        }
    }

    let on_disk: BTreeSet<&String> = names.iter().collect();
    let phantom: Vec<(&String, &String)> = mapping
        .iter()
        .filter(|(name, _)| !on_disk.contains(name))
        .collect();
    if !phantom.is_empty() {
        println!(
            "\n{}  In mapping but missing from {} ({}):",
            "⚠".yellow(),
            packages_dir.display(),
            phantom.len()
        );
        for (name, url) in &phantom {
            println!("  - {}: {}", name, url);
        }
    }

    if mismatches.is_empty() && matches > 0 {
        println!(
            "\n{} All {} repositories validated successfully!",
            "✓".green(),
            matches
        );
    }

    Ok(mismatches.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_url_treats_variants_as_equal() {
        let canonical = normalize_url("https://x/y");
        assert_eq!(normalize_url("https://x/y.git"), canonical);
        assert_eq!(normalize_url("https://x/y/"), canonical);
        assert_eq!(normalize_url("https://x/y.git/"), canonical);
    }

    #[test]
    fn test_normalize_url_keeps_distinct_urls_distinct() {
        assert_ne!(
            normalize_url("https://github.com/a/repo"),
            normalize_url("https://github.com/b/repo")
        );
    }

    #[tokio::test]
    async fn test_plain_directories_are_not_repositories() {
        let dir = TempDir::new().unwrap();
        let packages_dir = dir.path().join("pyhc_packages");
        fs::create_dir_all(packages_dir.join("plain")).unwrap();

        let mapping_path = dir.path().join("mapping.json");
        fs::write(&mapping_path, "{\n  \"plain\": \"https://x/y\"\n}").unwrap();

        // No checkouts at all: zero matches, zero mismatches, exit clean.
        let mismatches = run(&mapping_path, &packages_dir).await.unwrap();
        assert_eq!(mismatches, 0);
    }
}
