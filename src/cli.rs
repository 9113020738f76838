use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pyhc-curatr",
    about = "Curate the PyHC package catalog: submodules, license detection, and summary tables",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape the project-list YAML files and write the package→URL mapping
    ExtractUrls {
        /// Directory holding the package checkouts
        #[arg(long, default_value = "pyhc_packages")]
        packages_dir: PathBuf,

        /// Where to write the mapping artifact
        #[arg(long, default_value = "package_url_mapping.json")]
        output: PathBuf,
    },

    /// Register every mapped package as a git submodule
    AddSubmodules {
        /// Mapping artifact produced by extract-urls
        #[arg(long, default_value = "package_url_mapping.json")]
        mapping: PathBuf,

        /// Directory the submodules are created under
        #[arg(long, default_value = "pyhc_packages")]
        packages_dir: PathBuf,
    },

    /// Detect the license of every package checkout
    ExtractLicenses {
        /// Directory holding the package checkouts
        #[arg(long, default_value = "pyhc_packages")]
        packages_dir: PathBuf,

        /// Where to write the license-record artifact
        #[arg(long, default_value = "license_info.json")]
        output: PathBuf,
    },

    /// Render the license summary table
    LicenseTable {
        /// License-record artifact produced by extract-licenses
        #[arg(long, default_value = "license_info.json")]
        licenses: PathBuf,

        /// Table format
        #[arg(long, default_value = "markdown", value_name = "FORMAT")]
        format: TableFormat,
    },

    /// Check the mapping against the git remotes of the on-disk checkouts
    ValidateMapping {
        /// Mapping artifact produced by extract-urls
        #[arg(long, default_value = "package_url_mapping.json")]
        mapping: PathBuf,

        /// Directory holding the package checkouts
        #[arg(long, default_value = "pyhc_packages")]
        packages_dir: PathBuf,
    },
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum TableFormat {
    Markdown,
    Terminal,
}
