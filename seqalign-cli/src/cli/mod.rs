pub mod commands;
pub mod output;
pub mod settings;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seqalign",
    version,
    about = "Pairwise sequence alignment: similarity, edit distance, global and local alignment",
    long_about = "seqalign scores and aligns two symbol sequences with Needleman-Wunsch \
                  (global) or Smith-Waterman (local) dynamic programming, using a \
                  match/mismatch/gap model or a custom pairwise score table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to $SEQALIGN_HOME/config.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score or align two sequences
    Align(commands::align::AlignArgs),

    /// Translate an RNA/DNA sequence into protein
    Translate(commands::translate::TranslateArgs),
}

/// Log filter for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
