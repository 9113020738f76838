//! Ordered license detection over a package checkout.
//!
//! Sources are probed most-reliable first: a conventional license file,
//! then `pyproject.toml`, then `setup.py`. The first source yielding an
//! identifier wins. Detection is advisory metadata, so nothing here ever
//! fails a run: every read or decode error counts as "no match from this
//! source" and the detector degrades to [`UNKNOWN`].

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::license::patterns::PatternTable;

/// Sentinel for packages where no source yields a license.
pub const UNKNOWN: &str = "Unknown";

/// Conventional license file names, probed in order.
const LICENSE_FILE_NAMES: &[&str] = &[
    "LICENSE",
    "LICENSE.txt",
    "LICENSE.md",
    "LICENSE.rst",
    "License",
    "COPYING",
    "COPYING.txt",
    "license",
    "license.txt",
];

/// Determine the license identifier for the package rooted at `package_dir`.
///
/// Pure for a fixed filesystem snapshot: repeated calls return the same
/// identifier.
pub fn detect_license(package_dir: &Path, patterns: &PatternTable) -> String {
    if let Some(id) = from_license_file(package_dir, patterns) {
        return id.to_string();
    }
    if let Some(raw) = from_pyproject(package_dir) {
        return raw;
    }
    if let Some(raw) = from_setup_py(package_dir) {
        return raw;
    }
    UNKNOWN.to_string()
}

/// Probe the package root and its `licenses/` subdirectory for license
/// files. A file that exists but matches no pattern does not stop the
/// scan; the remaining candidates are still probed.
fn from_license_file(package_dir: &Path, patterns: &PatternTable) -> Option<&'static str> {
    let locations = [package_dir.to_path_buf(), package_dir.join("licenses")];

    for location in &locations {
        if !location.is_dir() {
            continue;
        }
        for name in LICENSE_FILE_NAMES {
            let path = location.join(name);
            if !path.is_file() {
                continue;
            }
            let Some(text) = read_lossy(&path) else {
                continue;
            };
            if let Some(id) = patterns.first_match(&text) {
                return Some(id);
            }
        }
    }
    None
}

/// Scan `pyproject.toml` for a `license` value. The value may be a nested
/// table with a `text` or `file` sub-key, or a plain string; either way
/// the first quoted value is taken verbatim.
fn from_pyproject(package_dir: &Path) -> Option<String> {
    let text = read_lossy(&package_dir.join("pyproject.toml"))?;

    let nested = Regex::new(
        r#"(?i)license\s*=\s*[{]?\s*['"]?(?:text|file)?\s*['"]?\s*[:=]?\s*['"]([^'"]+)['"]"#,
    )
    .ok()?;
    if let Some(caps) = nested.captures(&text) {
        return Some(caps[1].trim().to_string());
    }

    let plain = Regex::new(r#"(?i)license\s*=\s*['"]([^'"]+)['"]"#).ok()?;
    let caps = plain.captures(&text)?;
    Some(caps[1].trim().to_string())
}

/// Scan `setup.py` for a `license=` keyword argument.
fn from_setup_py(package_dir: &Path) -> Option<String> {
    let text = read_lossy(&package_dir.join("setup.py"))?;
    let re = Regex::new(r#"[Ll]icense\s*=\s*['"]([^'"]+)['"]"#).ok()?;
    let caps = re.captures(&text)?;
    Some(caps[1].trim().to_string())
}

/// Read a file as text, tolerating undecodable bytes. Any I/O error
/// collapses to `None`.
fn read_lossy(path: &Path) -> Option<String> {
    let bytes = fs::read(path).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn table() -> PatternTable {
        PatternTable::new().unwrap()
    }

    #[test]
    fn test_mit_license_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("LICENSE"),
            "MIT License\n\nCopyright (c) 2020 Example\n",
        )
        .unwrap();

        assert_eq!(detect_license(dir.path(), &table()), "MIT");
    }

    #[test]
    fn test_specific_bsd_beats_generic_marker() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("LICENSE"),
            "BSD 3-Clause License\n\nThis software is offered under the BSD License.\n",
        )
        .unwrap();

        assert_eq!(detect_license(dir.path(), &table()), "BSD-3-Clause");
    }

    #[test]
    fn test_license_file_outranks_pyproject() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE"), "MIT License\n").unwrap();
        fs::write(
            dir.path().join("pyproject.toml"),
            "[project]\nlicense = \"GPL-3.0\"\n",
        )
        .unwrap();

        assert_eq!(detect_license(dir.path(), &table()), "MIT");
    }

    #[test]
    fn test_unmatched_license_file_does_not_stop_the_scan() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE"), "All rights reserved.\n").unwrap();
        fs::write(
            dir.path().join("COPYING"),
            "GNU General Public License, version 3\n",
        )
        .unwrap();

        assert_eq!(detect_license(dir.path(), &table()), "GPL-3.0");
    }

    #[test]
    fn test_licenses_subdirectory_is_probed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("licenses")).unwrap();
        fs::write(dir.path().join("licenses/LICENSE.md"), "ISC License\n").unwrap();

        assert_eq!(detect_license(dir.path(), &table()), "ISC");
    }

    #[test]
    fn test_pyproject_plain_string() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pyproject.toml"),
            "[project]\nname = \"pkg\"\nlicense = \"Apache-2.0\"\n",
        )
        .unwrap();

        assert_eq!(detect_license(dir.path(), &table()), "Apache-2.0");
    }

    #[test]
    fn test_pyproject_nested_table() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pyproject.toml"),
            "[project]\nlicense = { text = \"MIT\" }\n",
        )
        .unwrap();

        assert_eq!(detect_license(dir.path(), &table()), "MIT");
    }

    #[test]
    fn test_setup_py_keyword_argument() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("setup.py"),
            "from setuptools import setup\nsetup(name='pkg', license='BSD')\n",
        )
        .unwrap();

        assert_eq!(detect_license(dir.path(), &table()), "BSD");
    }

    #[test]
    fn test_empty_directory_is_unknown_and_idempotent() {
        let dir = TempDir::new().unwrap();
        let patterns = table();

        assert_eq!(detect_license(dir.path(), &patterns), UNKNOWN);
        assert_eq!(detect_license(dir.path(), &patterns), UNKNOWN);
    }

    #[test]
    fn test_undecodable_license_file_degrades_to_next_source() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE"), [0xff, 0xfe, 0x00, 0x9f]).unwrap();
        fs::write(
            dir.path().join("setup.py"),
            "setup(license=\"MIT\")\n",
        )
        .unwrap();

        assert_eq!(detect_license(dir.path(), &table()), "MIT");
    }
}
