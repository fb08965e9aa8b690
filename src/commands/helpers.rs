//! Helpers shared by the graph commands

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use tracing::warn;

use crate::cli::{Cli, GraphArgs};
use graphtrace_core::config::TraceConfig;
use graphtrace_core::error::Result;
use graphtrace_core::graph::{load_graph_file, Graph, GraphFormat, LoadOptions, VertexId};
use graphtrace_core::search::{self, Algorithm};
use graphtrace_core::trace::{Event, Trace};
use graphtrace_core::{bail_usage, trace_time};

/// A graph file after loading
pub struct LoadedInput {
    pub path: PathBuf,
    pub graph: Graph,
    pub format: GraphFormat,
}

/// Load the graph named by `args`. CLI flags override the configuration.
pub fn load_graph(cli: &Cli, config: &TraceConfig, args: &GraphArgs) -> Result<LoadedInput> {
    let options = LoadOptions {
        directed: cli.directed || config.directed,
        default_weight: args.default_weight.unwrap_or(config.default_weight),
        format: args.input_format.graph_format(),
    };
    let loaded = load_graph_file(&args.file, &options)?;
    Ok(LoadedInput {
        path: args.file.clone(),
        graph: loaded.graph,
        format: loaded.format,
    })
}

/// Run `algorithm` over the loaded graph.
///
/// Dijkstra refuses graphs with negative weights; its result would be
/// meaningless.
pub fn trace_graph(
    input: &LoadedInput,
    algorithm: Algorithm,
    start: VertexId,
    end: Option<VertexId>,
) -> Result<Trace> {
    let graph = &input.graph;
    if algorithm == Algorithm::Dijkstra && graph.edges().iter().any(|edge| edge.weight < 0) {
        bail_usage!("Dijkstra does not support negative edge weights");
    }
    if !graph.contains(start) {
        warn!(start, "start vertex is not in the graph");
    }
    if let Some(end) = end.filter(|&end| !graph.contains(end)) {
        warn!(end, "target vertex is not in the graph");
    }

    let started = Instant::now();
    let trace = search::run(algorithm, graph, start, end);
    trace_time!(started, "run_search", steps = trace.len());
    Ok(trace)
}

/// `1 -> 3 -> 2`, or `(none)` for an empty path
pub fn path_label(path: &[VertexId]) -> String {
    if path.is_empty() {
        "(none)".to_string()
    } else {
        graphtrace_core::trace::format_path(path)
    }
}

/// `[1, 2, 3]` for a set of vertices
pub fn format_set(nodes: &BTreeSet<VertexId>) -> String {
    let items: Vec<String> = nodes.iter().map(|n| n.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Escape a free-text value for a records line
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Compact rendering of an event and its vertices, e.g. `check_edge(1, 3)`
pub fn event_label(event: &Event) -> String {
    match (event.primary(), event.secondary()) {
        (Some(first), Some(second)) => format!("{}({}, {})", event.kind(), first, second),
        (Some(first), None) => format!("{}({})", event.kind(), first),
        _ => event.kind().to_string(),
    }
}

/// `key=value` fields of an event for records output
pub fn event_fields(event: &Event) -> String {
    match *event {
        Event::Visit { node }
        | Event::Processing { node }
        | Event::HighlightPathNode { node } => format!("node={}", node),
        Event::CheckEdge { from, to }
        | Event::Traverse { from, to }
        | Event::Backtrack { from, to }
        | Event::HighlightPathEdge { from, to } => format!("from={} to={}", from, to),
        Event::UpdateDist { node, dist } => format!("node={} dist={}", node, dist),
        Event::NotFound { start } => format!("start={}", start),
        Event::CheckLoop => String::new(),
    }
}
