use anyhow::Result;
use regex::Regex;

/// License identifier → detection pattern, most specific first.
///
/// Order is load-bearing: the generic `BSD` pattern sits below the
/// clause-counted ones so "BSD License" boilerplate cannot shadow a
/// 3-Clause or 2-Clause match.
const PATTERNS: &[(&str, &str)] = &[
    ("MIT", r"MIT License"),
    ("BSD-3-Clause", r"BSD[- ]3[- ]Clause|3-Clause BSD|BSD 3-Clause"),
    (
        "BSD-2-Clause",
        r"BSD[- ]2[- ]Clause|2-Clause BSD|BSD 2-Clause|Simplified BSD",
    ),
    ("Apache-2.0", r"Apache License[,\s]+Version 2\.0|Apache-2\.0"),
    ("GPL-3.0", r"GNU General Public License[,\s]+version 3|GPL-3|GPLv3"),
    ("GPL-2.0", r"GNU General Public License[,\s]+version 2|GPL-2|GPLv2"),
    ("LGPL", r"GNU Lesser General Public License|LGPL"),
    ("ISC", r"ISC License"),
    ("BSD", r"BSD License"),
    ("Public Domain", r"Public Domain"),
    ("Unlicense", r"Unlicense"),
    ("AGPL", r"GNU Affero General Public License|AGPL"),
];

/// The compiled pattern table, built once per run and shared across every
/// package scan.
pub struct PatternTable {
    entries: Vec<(&'static str, Regex)>,
}

impl PatternTable {
    /// Compile the table. All patterns match case-insensitively.
    pub fn new() -> Result<Self> {
        let mut entries = Vec::with_capacity(PATTERNS.len());
        for (id, pattern) in PATTERNS {
            let re = Regex::new(&format!("(?i){}", pattern))?;
            entries.push((*id, re));
        }
        Ok(Self { entries })
    }

    /// Identifier of the first pattern matching anywhere in `text`.
    pub fn first_match(&self, text: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_bsd_wins_over_generic() {
        let table = PatternTable::new().unwrap();
        let text = "BSD 3-Clause License\n\nRedistribution under the BSD License is permitted.";
        assert_eq!(table.first_match(text), Some("BSD-3-Clause"));
    }

    #[test]
    fn test_matching_ignores_case() {
        let table = PatternTable::new().unwrap();
        assert_eq!(table.first_match("mit license"), Some("MIT"));
        assert_eq!(table.first_match("THE UNLICENSE"), Some("Unlicense"));
    }

    #[test]
    fn test_apache_with_comma_and_newline() {
        let table = PatternTable::new().unwrap();
        assert_eq!(
            table.first_match("Apache License,\nVersion 2.0"),
            Some("Apache-2.0")
        );
    }

    #[test]
    fn test_unrecognized_text_matches_nothing() {
        let table = PatternTable::new().unwrap();
        assert_eq!(table.first_match("All rights reserved."), None);
    }
}
