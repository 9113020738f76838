//! `pyhc-curatr` — maintenance tools for the PyHC package catalog.
//!
//! Five standalone utilities behind one binary, wired together only through
//! on-disk JSON artifacts:
//!
//! 1. [`mapping`] scrapes the project-list YAML files into a package→URL
//!    mapping (`extract-urls`).
//! 2. [`submodules`] registers every mapped package as a git submodule
//!    (`add-submodules`).
//! 3. [`license`] detects each package's license from its source tree
//!    (`extract-licenses`).
//! 4. [`report`] renders the license summary table (`license-table`).
//! 5. [`validate`] cross-checks the mapping against actual git remotes
//!    (`validate-mapping`).
//!
//! [`catalog`] holds the maintainer-curated tables (URL overrides, license
//! corrections, display names) that always win over scraped or detected
//! values.

pub mod artifact;
pub mod catalog;
pub mod cli;
pub mod git;
pub mod license;
pub mod mapping;
pub mod packages;
pub mod report;
pub mod submodules;
pub mod validate;
