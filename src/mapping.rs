//! Scraping the project-list YAML files into the package→URL mapping.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Deserialize;

use crate::artifact;
use crate::catalog;
use crate::packages;

/// Project-list documents consumed from the website checkout, in merge
/// order. Later files win on collision.
const PROJECT_LISTS: &[&str] = &[
    "projects_core.yml",
    "projects.yml",
    "projects_unevaluated.yml",
];

/// One record of a project list. Only the repository link matters here;
/// everything else in the record is ignored.
#[derive(Debug, Deserialize)]
struct ProjectEntry {
    code: Option<String>,
}

/// Reduce a repository URL to its canonical name: drop any `/tree/<ref>`
/// suffix, trailing slashes, and a `.git` extension, then take the last
/// path segment. Idempotent, so an already-canonical name passes through
/// unchanged.
pub fn canonical_repo_name(url: &str) -> String {
    let url = match url.split_once("/tree/") {
        Some((prefix, _)) => prefix,
        None => url,
    };
    let url = url.trim_end_matches('/');
    let url = url.strip_suffix(".git").unwrap_or(url);
    url.rsplit('/').next().unwrap_or(url).to_string()
}

/// Build the mapping and write it to `output`.
///
/// Scraped entries merge over the base table; the manual override table is
/// applied last and wins unconditionally. A scraped name colliding with an
/// existing entry under a different URL is suspicious, so it warns, but the
/// newer URL still replaces the older one.
pub fn run(packages_dir: &Path, output: &Path) -> Result<()> {
    let mut mapping: artifact::UrlMapping = catalog::BASE_MAPPING
        .iter()
        .map(|(name, url)| (name.to_string(), url.to_string()))
        .collect();

    let data_dir = packages_dir.join("heliophysicsPy.github.io").join("_data");
    for file_name in PROJECT_LISTS {
        let path = data_dir.join(file_name);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read project list {}", path.display()))?;
        let projects: Vec<ProjectEntry> = serde_yaml_ng::from_str(&text)
            .with_context(|| format!("failed to parse project list {}", path.display()))?;

        for project in projects {
            let Some(url) = project.code else { continue };
            let name = canonical_repo_name(&url);
            if let Some(existing) = mapping.get(&name) {
                if existing != &url {
                    eprintln!(
                        "{}  Duplicate: {} maps to both {} and {}",
                        "⚠".yellow(),
                        name,
                        existing,
                        url
                    );
                }
            }
            mapping.insert(name, url);
        }
    }

    for (name, url) in catalog::URL_OVERRIDES {
        mapping.insert(name.to_string(), url.to_string());
    }

    artifact::save(output, &mapping)?;

    println!("Found {} packages", mapping.len());
    println!("\nPackages:");
    for (name, url) in &mapping {
        println!("  {}: {}", name, url);
    }

    report_directory_drift(packages_dir, &mapping)?;
    Ok(())
}

/// Diagnostics only: directories without a mapping entry and mapping
/// entries without a directory. Neither affects the exit status.
fn report_directory_drift(packages_dir: &Path, mapping: &artifact::UrlMapping) -> Result<()> {
    let existing: BTreeSet<String> = packages::directories(packages_dir)?.into_iter().collect();
    let mapped: BTreeSet<String> = mapping.keys().cloned().collect();

    let missing: Vec<&String> = existing.difference(&mapped).collect();
    if !missing.is_empty() {
        eprintln!(
            "\n{}  Warning: {} directories without URLs:",
            "⚠".yellow(),
            missing.len()
        );
        for name in missing {
            eprintln!("  - {}", name);
        }
    }

    let extra: Vec<&String> = mapped.difference(&existing).collect();
    if !extra.is_empty() {
        eprintln!(
            "\n{}  Warning: {} URLs without directories:",
            "⚠".yellow(),
            extra.len()
        );
        for name in extra {
            eprintln!("  - {}", name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_canonical_repo_name_strips_decorations() {
        assert_eq!(
            canonical_repo_name("https://example.com/org/Repo.git/"),
            "Repo"
        );
        assert_eq!(
            canonical_repo_name("https://example.com/org/Repo/tree/main"),
            "Repo"
        );
        assert_eq!(
            canonical_repo_name("https://github.com/org/repo"),
            "repo"
        );
    }

    #[test]
    fn test_canonical_repo_name_is_idempotent() {
        let once = canonical_repo_name("https://example.com/org/Repo.git");
        assert_eq!(canonical_repo_name(&once), once);
    }

    /// Builds a minimal website checkout with the three project lists.
    fn write_project_lists(packages_dir: &Path, core: &str, main: &str, unevaluated: &str) {
        let data = packages_dir.join("heliophysicsPy.github.io").join("_data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("projects_core.yml"), core).unwrap();
        fs::write(data.join("projects.yml"), main).unwrap();
        fs::write(data.join("projects_unevaluated.yml"), unevaluated).unwrap();
    }

    #[test]
    fn test_run_merges_lists_and_applies_overrides() {
        let dir = TempDir::new().unwrap();
        let packages_dir = dir.path().join("pyhc_packages");
        write_project_lists(
            &packages_dir,
            "- name: SunPy\n  code: https://github.com/sunpy/sunpy\n",
            "- name: PyTplot\n  code: https://github.com/wrong-org/PyTplot\n- name: NoCode\n",
            "- name: Spacey\n  code: https://github.com/spacepy/spacepy.git\n",
        );

        let output = dir.path().join("mapping.json");
        run(&packages_dir, &output).unwrap();

        let mapping = artifact::load(&output).unwrap();
        assert_eq!(
            mapping.get("sunpy").map(String::as_str),
            Some("https://github.com/sunpy/sunpy")
        );
        // .git is stripped from the name but the URL is kept verbatim.
        assert_eq!(
            mapping.get("spacepy").map(String::as_str),
            Some("https://github.com/spacepy/spacepy.git")
        );
        // The scraped PyTplot URL loses to the manual override.
        assert_eq!(
            mapping.get("PyTplot").map(String::as_str),
            Some("https://github.com/MAVENSDC/PyTplot")
        );
        // Base entries survive the merge.
        assert_eq!(
            mapping.get("standards").map(String::as_str),
            Some("https://github.com/heliophysicsPy/standards")
        );
        // Records without a code field contribute nothing.
        assert!(!mapping.contains_key("NoCode"));
    }

    #[test]
    fn test_run_fails_when_a_project_list_is_missing() {
        let dir = TempDir::new().unwrap();
        let packages_dir = dir.path().join("pyhc_packages");
        fs::create_dir_all(&packages_dir).unwrap();

        let output = dir.path().join("mapping.json");
        let err = run(&packages_dir, &output).unwrap_err();
        assert!(err.to_string().contains("projects_core.yml"));
    }
}
