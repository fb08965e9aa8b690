use crate::commands::helpers::{event_fields, quote};
use graphtrace_core::trace::Trace;

/// Output the trace as line-oriented records
///
/// `H` header, one `S` line per step, then a `P` line with the path.
pub fn output_run_records(trace: &Trace) {
    let end = trace
        .end
        .map(|end| end.to_string())
        .unwrap_or_else(|| "all".to_string());
    println!(
        "H graphtrace=1 records=1 mode=run algorithm={} start={} end={} found={} cost={} steps={}",
        trace.algorithm.to_string().to_lowercase(),
        trace.start,
        end,
        trace.found(),
        trace.cost,
        trace.len()
    );

    for (i, step) in trace.steps.iter().enumerate() {
        let mut line = format!("S {} {}", i + 1, step.kind());
        let fields = event_fields(&step.event);
        if !fields.is_empty() {
            line.push(' ');
            line.push_str(&fields);
        }
        if let Some(code_line) = step.line {
            line.push_str(&format!(" line={}", code_line));
        }
        line.push_str(&format!(
            " path={} frontier={} {}",
            quote(&step.path),
            quote(&step.frontier),
            quote(&step.description)
        ));
        println!("{}", line);
    }

    if trace.found() {
        let nodes: Vec<String> = trace.path().iter().map(|n| n.to_string()).collect();
        println!("P {}", nodes.join(" "));
    }
}
