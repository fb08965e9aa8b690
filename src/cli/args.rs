//! Argument groups shared by several subcommands

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use graphtrace_core::graph::GraphFormat;
use graphtrace_core::search::Algorithm;

use super::parse::parse_algorithm;

/// Layout of the graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Detect from the file contents
    #[default]
    Auto,
    /// `from to [weight]` per line
    EdgeList,
    /// Square adjacency matrix
    Matrix,
}

impl InputFormat {
    pub fn graph_format(self) -> Option<GraphFormat> {
        match self {
            InputFormat::Auto => None,
            InputFormat::EdgeList => Some(GraphFormat::EdgeList),
            InputFormat::Matrix => Some(GraphFormat::Matrix),
        }
    }
}

/// Where to read the graph from and how to interpret it
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph file (edge list or adjacency matrix)
    pub file: PathBuf,

    /// Layout of the graph file
    #[arg(long, value_enum, default_value = "auto")]
    pub input_format: InputFormat,

    /// Weight for edge-list lines without a third column
    #[arg(long)]
    pub default_weight: Option<i64>,
}

/// A graph plus the search to run over it
#[derive(Args, Debug, Clone)]
pub struct TraceArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Algorithm (bfs, dfs, dijkstra); defaults to the configured one
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Start vertex
    #[arg(long, short)]
    pub start: i64,

    /// Target vertex; omit to explore everything reachable
    #[arg(long, short)]
    pub end: Option<i64>,
}
