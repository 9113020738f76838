use crate::report::LicenseTable;

/// Render the pipe-table document to stdout.
pub fn render(table: &LicenseTable) {
    println!("# PyHC Package Licenses\n");
    println!("| Package | License |");
    println!("|---------|---------|");
    for row in &table.rows {
        println!("| {} | {} |", row.display_name, row.license);
    }

    println!("\n## License Summary\n");
    println!("| License | Count |");
    println!("|---------|-------|");
    for (license, count) in &table.counts {
        println!("| {} | {} |", license, count);
    }

    println!("\n**Total Packages:** {}", table.total);
}
