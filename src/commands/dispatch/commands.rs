//! Command implementations for all graphtrace commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::macros::trace_command;
use crate::commands::{compare, info, pseudocode, run, state};
use graphtrace_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run {
                trace,
                pseudocode: show_lines,
            } => {
                let input = ctx.load_graph(&trace.graph)?;
                trace_command!(ctx.cli, ctx.start, "load_graph");
                let algorithm = ctx.algorithm(trace.algorithm);
                let show_lines = *show_lines || ctx.config.show_pseudocode;
                run::execute(
                    ctx.cli,
                    &input,
                    algorithm,
                    trace.start,
                    trace.end,
                    show_lines,
                )
            }
            Commands::Compare { graph, start, end } => {
                let input = ctx.load_graph(graph)?;
                trace_command!(ctx.cli, ctx.start, "load_graph");
                compare::execute(ctx.cli, &input, *start, *end)
            }
            Commands::State { trace, step } => {
                let input = ctx.load_graph(&trace.graph)?;
                trace_command!(ctx.cli, ctx.start, "load_graph");
                let algorithm = ctx.algorithm(trace.algorithm);
                state::execute(ctx.cli, &input, algorithm, trace.start, trace.end, *step)
            }
            Commands::Pseudocode { algorithm } => pseudocode::execute(ctx.cli, *algorithm),
            Commands::Info { graph } => {
                let input = ctx.load_graph(graph)?;
                trace_command!(ctx.cli, ctx.start, "load_graph");
                info::execute(ctx.cli, &input)
            }
        }
    }
}
