//! `graphtrace compare`: run every algorithm on the same input

mod human;
mod json;
mod records;

use crate::cli::Cli;
use crate::commands::helpers::{trace_graph, LoadedInput};
use graphtrace_core::error::Result;
use graphtrace_core::format::OutputFormat;
use graphtrace_core::graph::VertexId;
use graphtrace_core::search::Algorithm;
use graphtrace_core::trace::{Summary, Trace};

/// One algorithm's result in a comparison
pub struct Row {
    pub summary: Summary,
    pub trace: Trace,
}

/// Execute the compare command
pub fn execute(
    cli: &Cli,
    input: &LoadedInput,
    start: VertexId,
    end: Option<VertexId>,
) -> Result<()> {
    let mut rows = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let trace = trace_graph(input, algorithm, start, end)?;
        let summary = Summary::new(&trace, &input.graph);
        rows.push(Row { summary, trace });
    }

    match cli.format {
        OutputFormat::Human => human::output_compare_human(cli, &rows),
        OutputFormat::Json => json::output_compare_json(input, &rows)?,
        OutputFormat::Records => records::output_compare_records(input, &rows),
    }

    Ok(())
}
