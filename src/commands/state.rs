//! `graphtrace state`: replay a trace up to a given step

use serde_json::json;

use crate::cli::Cli;
use crate::commands::helpers::{event_label, format_set, quote, trace_graph, LoadedInput};
use graphtrace_core::bail_invalid;
use graphtrace_core::error::Result;
use graphtrace_core::format::OutputFormat;
use graphtrace_core::graph::VertexId;
use graphtrace_core::search::Algorithm;
use graphtrace_core::trace::{pseudocode, Replay, ReplayState, Step, Trace};

/// Execute the state command
pub fn execute(
    cli: &Cli,
    input: &LoadedInput,
    algorithm: Algorithm,
    start: VertexId,
    end: Option<VertexId>,
    step: usize,
) -> Result<()> {
    let trace = trace_graph(input, algorithm, start, end)?;
    if step > trace.len() {
        bail_invalid!(
            "step",
            format!("{} (the trace has {} steps)", step, trace.len())
        );
    }

    let mut replay = Replay::new(&trace);
    let state = replay.seek(step);
    let last = step.checked_sub(1).and_then(|i| trace.steps.get(i));

    match cli.format {
        OutputFormat::Human => output_human(&trace, state, last),
        OutputFormat::Json => {
            let output = json!({
                "algorithm": trace.algorithm,
                "start": trace.start,
                "end": trace.end,
                "total_steps": trace.len(),
                "step": last,
                "state": state,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => output_records(&trace, state),
    }

    Ok(())
}

fn output_human(trace: &Trace, state: &ReplayState, last: Option<&Step>) {
    println!(
        "{} step {} of {}",
        trace.algorithm,
        state.position,
        trace.len()
    );
    match last {
        Some(step) => println!("Event:       {}  {}", event_label(&step.event), step.description),
        None => println!("Event:       (none)"),
    }
    if let Some(line) = state.line {
        let text = pseudocode(trace.algorithm)
            .get(line)
            .map(|text| text.trim())
            .unwrap_or_default();
        println!("Line:        {}: {}", line, text);
    }
    if let Some(current) = state.current {
        println!("Current:     {}", current);
    }
    if let Some((from, to)) = state.active_edge {
        println!("Edge:        {} -> {}", from, to);
    }
    println!("Visited:     {}", format_set(&state.visited));
    println!("Processed:   {}", format_set(&state.processed));
    if !state.distances.is_empty() {
        let distances: Vec<String> = state
            .distances
            .iter()
            .map(|(node, dist)| format!("{}={}", node, dist))
            .collect();
        println!("Distances:   {}", distances.join(", "));
    }
    println!("Path:        {}", state.path);
    println!("Frontier:    {}", state.frontier);
    if !state.path_nodes.is_empty() {
        println!(
            "Highlighted: {}",
            graphtrace_core::trace::format_path(&state.path_nodes)
        );
    }
    if state.not_found {
        println!("Target not found");
    }
}

fn output_records(trace: &Trace, state: &ReplayState) {
    let kind = state
        .last_kind
        .map(|kind| kind.to_string())
        .unwrap_or_else(|| "none".to_string());
    println!(
        "H graphtrace=1 records=1 mode=state algorithm={} step={} total={} kind={} not_found={}",
        trace.algorithm.to_string().to_lowercase(),
        state.position,
        trace.len(),
        kind,
        state.not_found
    );
    if let Some(current) = state.current {
        println!("C current={}", current);
    }
    for node in &state.visited {
        println!("V {}", node);
    }
    for (node, dist) in &state.distances {
        println!("D {} {}", node, dist);
    }
    println!(
        "F path={} frontier={}",
        quote(&state.path),
        quote(&state.frontier)
    );
}
