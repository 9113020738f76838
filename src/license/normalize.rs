/// Map textual variants of a license name onto its canonical identifier.
///
/// Exact-match lookup only: unrecognized strings pass through unchanged,
/// as do the empty string and the `Unknown` sentinel. A bare `BSD` is
/// deliberately rendered as "BSD (unspecified)" rather than guessing a
/// clause count.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() || raw == "Unknown" {
        return raw.to_string();
    }

    match raw {
        "BSD 3-Clause" | "BSD-3-Clause License" | "BSD 3-Clause License" | "BSD-3" => {
            "BSD-3-Clause".to_string()
        }
        "BSD-2" => "BSD-2-Clause".to_string(),
        "BSD" => "BSD (unspecified)".to_string(),
        "MIT License" => "MIT".to_string(),
        "Apache License 2.0" | "Apache 2.0" => "Apache-2.0".to_string(),
        "GPL-2" => "GPL-2.0".to_string(),
        "GPL-3" => "GPL-3.0".to_string(),
        other => other.to_string(),
    }
}
