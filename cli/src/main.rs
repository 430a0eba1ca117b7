#![deny(missing_docs)]

//! # Modelgen CLI
//!
//! Command Line Interface for generating TypeScript interfaces or Java classes
//! from the `components.schemas` section of a YAML document.
//!
//! Supported Commands:
//! - `gen`: Renders models through a built-in or custom Handlebars template.

use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliResult;
use crate::prompt::{DefaultsPrompter, InquirePrompter};

mod error;
mod generate;
mod output;
mod prompt;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Schema-driven model generator")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate model sources from a YAML document.
    Gen(generate::GenArgs),
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "info,modelgen=debug,modelgen_core=debug".to_string(),
            _ => "debug,modelgen=trace,modelgen_core=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Gen(args) => {
            if args.yes {
                generate::execute(args, &DefaultsPrompter)?;
            } else {
                generate::execute(args, &InquirePrompter)?;
            }
        }
    }

    Ok(())
}
