use serde::Serialize;

use graphtrace_core::error::Result;
use graphtrace_core::graph::VertexId;
use graphtrace_core::trace::Trace;

#[derive(Serialize)]
struct RunOutput<'a> {
    #[serde(flatten)]
    trace: &'a Trace,
    found: bool,
    path: Vec<VertexId>,
}

/// Output the trace as a JSON document
pub fn output_run_json(trace: &Trace) -> Result<()> {
    let output = RunOutput {
        trace,
        found: trace.found(),
        path: trace.path(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
