//! `pyhc-curatr` — curate the PyHC package catalog.
//!
//! # Commands
//! 1. `extract-urls` — scrape the project-list YAML files into the
//!    package→URL mapping ([`pyhc_curatr::mapping`]).
//! 2. `add-submodules` — register every mapped package as a git submodule
//!    ([`pyhc_curatr::submodules`]); exits `1` if any addition failed.
//! 3. `extract-licenses` — detect each package's license and persist the
//!    record ([`pyhc_curatr::license`]).
//! 4. `license-table` — render the license summary ([`pyhc_curatr::report`]).
//! 5. `validate-mapping` — cross-check the mapping against the on-disk git
//!    remotes ([`pyhc_curatr::validate`]); exits `1` if any URL mismatches.

use anyhow::Result;
use clap::Parser;

use pyhc_curatr::cli::{Cli, Command};
use pyhc_curatr::{license, mapping, report, submodules, validate};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::ExtractUrls {
            packages_dir,
            output,
        } => {
            mapping::run(&packages_dir, &output)?;
        }
        Command::AddSubmodules {
            mapping,
            packages_dir,
        } => {
            let failures = submodules::run(&mapping, &packages_dir).await?;
            if failures > 0 {
                std::process::exit(1);
            }
        }
        Command::ExtractLicenses {
            packages_dir,
            output,
        } => {
            license::run(&packages_dir, &output)?;
        }
        Command::LicenseTable { licenses, format } => {
            report::run(&licenses, format)?;
        }
        Command::ValidateMapping {
            mapping,
            packages_dir,
        } => {
            let mismatches = validate::run(&mapping, &packages_dir).await?;
            if mismatches > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
