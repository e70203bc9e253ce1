//! Command-line interface for vntr-filter.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **score**: Compute the complexity score for one or more motifs
//! - **check**: Apply the validity threshold, optionally against a
//!   persisted score cache
//!
//! ## Usage
//!
//! ```text
//! # Score a motif
//! vntr-filter score ATGATG
//!
//! # Override the number of simultaneously masked positions
//! vntr-filter score --masked-positions 2 AGGGTCA
//!
//! # Check candidates against the default threshold, reusing a cache
//! vntr-filter check --cache scores.json ATGATG ACGT
//!
//! # JSON output for scripting
//! vntr-filter check ATGATG --format json
//! ```

use clap::{Parser, Subcommand};

pub mod check;
pub mod score;

#[derive(Parser)]
#[command(name = "vntr-filter")]
#[command(version)]
#[command(about = "Score tandem repeat motifs and filter STR-like VNTR candidates")]
#[command(
    long_about = "vntr-filter decides whether a candidate variable-number-tandem-repeat (VNTR) locus is really a short-tandem-repeat (STR) in disguise.\n\nIt scores how self-similar a motif is by masking subsets of its positions and comparing the masked motif against its own cyclic rotations. Motifs scoring above the threshold are too repetitive to be useful VNTR candidates and are rejected."
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
    /// Compute complexity scores for motifs
    Score(score::ScoreArgs),

    /// Check motifs against the STR-likeness threshold
    Check(check::CheckArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
