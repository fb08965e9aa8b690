//! `graphtrace run`: print every step of one search

mod human;
mod json;
mod records;

use crate::cli::Cli;
use crate::commands::helpers::{trace_graph, LoadedInput};
use graphtrace_core::error::Result;
use graphtrace_core::format::OutputFormat;
use graphtrace_core::graph::VertexId;
use graphtrace_core::search::Algorithm;

/// Execute the run command
pub fn execute(
    cli: &Cli,
    input: &LoadedInput,
    algorithm: Algorithm,
    start: VertexId,
    end: Option<VertexId>,
    show_lines: bool,
) -> Result<()> {
    let trace = trace_graph(input, algorithm, start, end)?;

    match cli.format {
        OutputFormat::Human => human::output_run_human(cli, &trace, show_lines),
        OutputFormat::Json => json::output_run_json(&trace)?,
        OutputFormat::Records => records::output_run_records(&trace),
    }

    Ok(())
}
