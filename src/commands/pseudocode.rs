//! `graphtrace pseudocode`: print an algorithm's listing

use serde_json::json;

use crate::cli::Cli;
use crate::commands::helpers::quote;
use graphtrace_core::error::Result;
use graphtrace_core::format::OutputFormat;
use graphtrace_core::search::Algorithm;
use graphtrace_core::trace::pseudocode;

/// Execute the pseudocode command
pub fn execute(cli: &Cli, algorithm: Algorithm) -> Result<()> {
    let listing = pseudocode(algorithm);

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}", algorithm);
            }
            for (i, line) in listing.iter().enumerate() {
                println!("{:>2}  {}", i, line);
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "algorithm": algorithm,
                "lines": listing,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H graphtrace=1 records=1 mode=pseudocode algorithm={} lines={}",
                algorithm.to_string().to_lowercase(),
                listing.len()
            );
            for (i, line) in listing.iter().enumerate() {
                println!("L {} {}", i, quote(line));
            }
        }
    }

    Ok(())
}
