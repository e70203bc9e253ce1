//! Check command - apply the STR-likeness threshold to candidate motifs,
//! optionally reading and writing a persisted score cache.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use crate::cache::ScoreCache;
use crate::cli::OutputFormat;
use crate::core::motif::Motif;
use crate::filter::{check_motif, DEFAULT_COMPLEXITY_THRESHOLD};

/// Arguments for the check command
#[derive(Args)]
pub struct CheckArgs {
    /// Motif sequences to check
    #[arg(required = true)]
    pub motifs: Vec<String>,

    /// Complexity score above which a motif is rejected as STR-like
    #[arg(short, long, default_value_t = DEFAULT_COMPLEXITY_THRESHOLD)]
    pub threshold: f64,

    /// Score cache file to load before checking and write back afterwards
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// Do not reuse cached scores; recompute and overwrite cache entries
    #[arg(long)]
    pub no_cache_reads: bool,
}

#[derive(Serialize)]
struct CheckRecord {
    motif: String,
    score: f64,
    is_valid: bool,
    from_cache: bool,
}

/// Execute the check command
///
/// # Errors
///
/// Returns an error if a motif is empty, scoring fails, or the cache file
/// cannot be read or written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut cache = match &args.cache {
        Some(path) if path.exists() => {
            let cache = ScoreCache::load_from_file(path)
                .with_context(|| format!("loading score cache from {}", path.display()))?;
            if verbose {
                eprintln!(
                    "Loaded {} cached scores from {}",
                    cache.len(),
                    path.display()
                );
            }
            cache
        }
        _ => ScoreCache::new(),
    };

    let use_cached_scores = !args.no_cache_reads;
    let mut records = Vec::new();

    for seq in &args.motifs {
        let motif = Motif::new(seq.clone())?;
        let verdict = check_motif(&motif, args.threshold, use_cached_scores, &mut cache)?;

        if verbose && verdict.from_cache {
            eprintln!("{motif}: score reused from cache");
        }

        records.push(CheckRecord {
            motif: motif.as_str().to_string(),
            score: verdict.score,
            is_valid: verdict.is_valid,
            from_cache: verdict.from_cache,
        });
    }

    match format {
        OutputFormat::Text => {
            for r in &records {
                let verdict = if r.is_valid { "accept" } else { "reject" };
                println!("{}\tscore {:.4}\t{}", r.motif, r.score, verdict);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    if let Some(path) = &args.cache {
        cache
            .save_to_file(path)
            .with_context(|| format!("saving score cache to {}", path.display()))?;
        if verbose {
            eprintln!("Saved {} scores to {}", cache.len(), path.display());
        }
    }

    Ok(())
}
