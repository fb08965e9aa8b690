//! Command dispatch logic for graphtrace

use std::time::Instant;

use crate::cli::Cli;
use graphtrace_core::config::TraceConfig;
use graphtrace_core::error::Result;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = TraceConfig::resolve(cli.config.as_deref())?;

    trace_command!(cli, start, "resolve_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
