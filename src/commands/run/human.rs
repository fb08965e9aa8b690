use crate::cli::Cli;
use crate::commands::helpers::{event_label, path_label};
use graphtrace_core::trace::{pseudocode, Trace};

/// Output the trace in human-readable format
pub fn output_run_human(cli: &Cli, trace: &Trace, show_lines: bool) {
    if !cli.quiet {
        let route = match trace.end {
            Some(end) => format!("from {} to {}", trace.start, end),
            None => format!("from {}", trace.start),
        };
        println!("{} {} ({} steps)", trace.algorithm, route, trace.len());

        let listing = pseudocode(trace.algorithm);
        for (i, step) in trace.steps.iter().enumerate() {
            println!(
                "{:>4}  {:<28} {}",
                i + 1,
                event_label(&step.event),
                step.description
            );
            println!(
                "      path: {:<20} frontier: {}",
                if step.path.is_empty() { "-" } else { step.path.as_str() },
                step.frontier
            );
            if show_lines {
                let code = step
                    .line
                    .and_then(|line| listing.get(line).map(|text| (line, text)));
                if let Some((line, text)) = code {
                    println!("      line {}: {}", line, text.trim());
                }
            }
        }
        println!();
    }

    if trace.found() {
        println!("Path: {}", path_label(&trace.path()));
        println!("Cost: {}", trace.cost);
    } else if let Some(end) = trace.end {
        println!("No path from {} to {}", trace.start, end);
    } else {
        println!("Explored everything reachable from {}", trace.start);
    }
}
