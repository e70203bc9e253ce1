//! Score command - compute complexity scores for motifs directly.

use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::motif::Motif;
use crate::scoring::complexity::flexible_score_with_stats;

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Motif sequences to score
    #[arg(required = true)]
    pub motifs: Vec<String>,

    /// Number of positions to mask simultaneously
    /// (default: one per ten motif symbols, rounded up)
    #[arg(short, long)]
    pub masked_positions: Option<usize>,
}

#[derive(Serialize)]
struct ScoreRecord {
    motif: String,
    length: usize,
    score: f64,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if a motif is empty or scoring fails.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut records = Vec::new();

    for seq in &args.motifs {
        let motif = Motif::new(seq.clone())?;
        let (score, stats) = flexible_score_with_stats(&motif, args.masked_positions)?;

        if verbose {
            if stats.used_fallback {
                eprintln!(
                    "{}: long motif ({} symbols), used single-position masking",
                    motif,
                    motif.len()
                );
            } else {
                eprintln!(
                    "{}: {} subsets, {} rotation comparisons",
                    motif, stats.subsets_evaluated, stats.comparisons
                );
            }
        }

        records.push(ScoreRecord {
            motif: motif.as_str().to_string(),
            length: motif.len(),
            score,
        });
    }

    match format {
        OutputFormat::Text => {
            for r in &records {
                println!("{}\tlen {}\tscore {:.4}", r.motif, r.length, r.score);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}
