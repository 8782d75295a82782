use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use seqalign_core::SeqAlignError;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then SEQALIGN_LOG, then the -v count
    let log_level =
        std::env::var("SEQALIGN_LOG").unwrap_or_else(|_| cli::log_level(cli.verbose).to_string());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli::settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Align(args) => crate::cli::commands::align::run(args, &config),
        Commands::Translate(args) => crate::cli::commands::translate::run(args, &config),
    }
}

/// Exit status for a failed run, by error kind
fn exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<SeqAlignError>() {
        Some(SeqAlignError::Configuration(_)) => 2,
        Some(SeqAlignError::Io(_)) => 3,
        Some(SeqAlignError::Parse(_)) => 4,
        Some(err) if err.is_validation() => 5,
        _ => 1,
    }
}
