use super::Row;
use crate::commands::helpers::{quote, LoadedInput};

/// Output the comparison as line-oriented records
pub fn output_compare_records(input: &LoadedInput, rows: &[Row]) {
    println!(
        "H graphtrace=1 records=1 mode=compare vertices={} edges={} directed={}",
        input.graph.vertex_count(),
        input.graph.edge_count(),
        input.graph.directed()
    );
    for row in rows {
        let summary = &row.summary;
        println!(
            "R algorithm={} route={} steps={} cost={} found={} complexity={}",
            summary.algorithm.to_string().to_lowercase(),
            summary.route_label(),
            summary.steps,
            summary.cost,
            row.trace.found(),
            quote(&summary.complexity)
        );
    }
}
