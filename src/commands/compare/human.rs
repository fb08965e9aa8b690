use super::Row;
use crate::cli::Cli;
use crate::commands::helpers::path_label;

/// Output the comparison as a table
pub fn output_compare_human(cli: &Cli, rows: &[Row]) {
    if !cli.quiet {
        println!(
            "{:<10} {:<10} {:>6} {:>6}  {:<24} PATH",
            "ALGORITHM", "ROUTE", "STEPS", "COST", "COMPLEXITY"
        );
    }
    for row in rows {
        let summary = &row.summary;
        println!(
            "{:<10} {:<10} {:>6} {:>6}  {:<24} {}",
            summary.algorithm.to_string(),
            summary.route_label(),
            summary.steps,
            summary.cost_label(),
            summary.complexity,
            path_label(&row.trace.path())
        );
    }
}
