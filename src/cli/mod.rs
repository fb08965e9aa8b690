//! CLI argument parsing for graphtrace
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config, --directed

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graphtrace_core::format::OutputFormat;
use graphtrace_core::search::Algorithm;

pub use args::{GraphArgs, TraceArgs};
use parse::{parse_algorithm, parse_format};

/// Graphtrace - step-by-step traces of BFS, DFS and Dijkstra
#[derive(Parser, Debug)]
#[command(name = "graphtrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `debug` or `graphtrace=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "GRAPHTRACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Treat the graph as directed
    #[arg(long, global = true)]
    pub directed: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one algorithm and print every step
    Run {
        #[command(flatten)]
        trace: TraceArgs,

        /// Print the pseudocode line next to each step
        #[arg(long)]
        pseudocode: bool,
    },

    /// Run all algorithms and print one summary row each
    Compare {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start vertex
        #[arg(long, short)]
        start: i64,

        /// Target vertex; omit to explore everything reachable
        #[arg(long, short)]
        end: Option<i64>,
    },

    /// Replay a trace up to a step and print the reconstructed state
    State {
        #[command(flatten)]
        trace: TraceArgs,

        /// Number of steps to apply (0 = before the first step)
        #[arg(long, short = 'k')]
        step: usize,
    },

    /// Print the numbered pseudocode listing of an algorithm
    Pseudocode {
        /// Algorithm (bfs, dfs, dijkstra)
        #[arg(value_parser = parse_algorithm)]
        algorithm: Algorithm,
    },

    /// Show the detected layout, size and vertices of a graph file
    Info {
        #[command(flatten)]
        graph: GraphArgs,
    },
}
