//! HealthAtlas CLI - indicator dashboard for African public-health data.

mod cli;
mod commands;
mod logging;
mod render;

use std::io::IsTerminal;

use clap::Parser;
use cli::{Cli, Commands};
use logging::{LogConfig, init_logging};

fn main() {
    let cli = Cli::parse();

    init_logging(&LogConfig::from_verbose(cli.verbose).with_ansi(std::io::stderr().is_terminal()));

    let result = match cli.command {
        Commands::Clean { ingest, output } => commands::clean::run(ingest, output, cli.verbose),

        Commands::Views {
            ingest,
            indicator,
            rows,
            json,
        } => commands::views::run(ingest, indicator, rows, json, cli.verbose),

        Commands::Explore { ingest, indicator } => {
            commands::explore::run(ingest, indicator, cli.verbose)
        }

        Commands::Export { ingest, output } => commands::export::run(ingest, output, cli.verbose),

        Commands::Status { ingest, json } => commands::status::run(ingest, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
