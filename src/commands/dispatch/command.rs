//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, GraphArgs};
use crate::commands::helpers::{self, LoadedInput};
use graphtrace_core::config::TraceConfig;
use graphtrace_core::error::Result;
use graphtrace_core::search::Algorithm;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a TraceConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a TraceConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Load the graph named by `args`, applying CLI and config settings
    pub fn load_graph(&self, args: &GraphArgs) -> Result<LoadedInput> {
        helpers::load_graph(self.cli, self.config, args)
    }

    /// The algorithm to run: the flag if given, else the configured default
    pub fn algorithm(&self, requested: Option<Algorithm>) -> Algorithm {
        requested.unwrap_or(self.config.algorithm)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphtrace {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step traces of BFS, DFS and Dijkstra.");
        println!();
        println!("Run `graphtrace --help` for usage information.");
        Ok(())
    }
}
