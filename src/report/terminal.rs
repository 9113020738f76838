use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::report::LicenseTable;

/// Render a colored terminal report.
pub fn render(table: &LicenseTable) {
    println!("\n {}\n", "PyHC Package Licenses".bold());

    let mut packages = Table::new();
    packages
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Package").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
        ]);
    for row in &table.rows {
        packages.add_row(vec![
            Cell::new(&row.display_name),
            Cell::new(&row.license),
        ]);
    }
    println!("{}", packages);

    println!("\n {}\n", "License Summary".bold());

    let mut summary = Table::new();
    summary
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Count").add_attribute(Attribute::Bold),
        ]);
    for (license, count) in &table.counts {
        summary.add_row(vec![Cell::new(license), Cell::new(count.to_string())]);
    }
    println!("{}", summary);

    println!("\n {} {}", "Total packages:".bold(), table.total);
}
