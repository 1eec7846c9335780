//! Command-line interface for seqmatch.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Find the database record that best matches a query sequence
//! - **algorithms**: List the available comparison algorithms
//! - **serve**: Start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # Search a database with the default algorithm
//! seqmatch search database.fa query.fa
//!
//! # Pick an algorithm and tune alignment weights
//! seqmatch search database.fa query.fa -a needleman_wunsch --gap -2
//!
//! # Pipe the query from stdin
//! cat query.fa | seqmatch search database.fa -
//!
//! # JSON output for scripting
//! seqmatch search database.fa query.fa --format json
//!
//! # Start web UI
//! seqmatch serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

pub mod algorithms;
pub mod search;

#[derive(Parser)]
#[command(name = "seqmatch")]
#[command(version)]
#[command(about = "Find the best-matching DNA sequence in a database")]
#[command(
    long_about = "seqmatch compares a query sequence against every record in a database file and reports the single best match.\n\nFour comparison algorithms are available:\n- edit_distance: fewest single-character edits (lower is better)\n- longest_common_subsequence: longest shared subsequence (higher is better)\n- longest_common_substring: longest shared contiguous run (higher is better)\n- needleman_wunsch: global alignment score with configurable weights (higher is better)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a database for the best match to a query sequence
    Search(search::SearchArgs),

    /// List the available comparison algorithms
    Algorithms,

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
