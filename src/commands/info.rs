//! `graphtrace info`: describe a graph file

use serde_json::json;

use crate::cli::Cli;
use crate::commands::helpers::LoadedInput;
use graphtrace_core::error::Result;
use graphtrace_core::format::OutputFormat;

/// Execute the info command
pub fn execute(cli: &Cli, input: &LoadedInput) -> Result<()> {
    let graph = &input.graph;

    match cli.format {
        OutputFormat::Human => {
            let vertices: Vec<String> = graph.vertices().map(|v| v.to_string()).collect();
            println!("File:      {}", input.path.display());
            println!("Format:    {}", input.format);
            println!("Directed:  {}", graph.directed());
            println!("Vertices:  {}", graph.vertex_count());
            println!("Edges:     {}", graph.edge_count());
            println!("Vertex ids: {}", vertices.join(" "));
            if cli.verbose && !graph.is_empty() {
                println!();
                print!("{}", graph.to_edge_list());
            }
        }
        OutputFormat::Json => {
            let vertices: Vec<i64> = graph.vertices().collect();
            let output = json!({
                "file": input.path.display().to_string(),
                "format": input.format,
                "directed": graph.directed(),
                "vertex_count": graph.vertex_count(),
                "edge_count": graph.edge_count(),
                "vertices": vertices,
                "edges": graph.edges(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H graphtrace=1 records=1 mode=info format={} directed={} vertices={} edges={}",
                input.format,
                graph.directed(),
                graph.vertex_count(),
                graph.edge_count()
            );
            for edge in graph.edges() {
                println!("E {} {} {}", edge.from, edge.to, edge.weight);
            }
        }
    }

    Ok(())
}
