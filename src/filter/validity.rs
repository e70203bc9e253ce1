use serde::Serialize;

use crate::cache::ScoreCache;
use crate::core::motif::Motif;
use crate::scoring::complexity::flexible_score;
use crate::scoring::ScoringError;

/// Default acceptance threshold: motifs scoring strictly above this are
/// rejected as STR-like.
pub const DEFAULT_COMPLEXITY_THRESHOLD: f64 = 0.85;

/// Outcome of the validity check for one motif
#[derive(Debug, Clone, Serialize)]
pub struct MotifVerdict {
    /// False when the motif is too self-similar (STR-like)
    pub is_valid: bool,

    /// Complexity score in `[0, 1]`
    pub score: f64,

    /// Whether the score came from the cache instead of a fresh search
    pub from_cache: bool,
}

/// Decide whether a candidate VNTR motif is valid.
///
/// With `use_cached_scores` set, a cached score is reused as-is. On a
/// cache miss, or whenever cache reads are disabled, the score is
/// recomputed with the default mask count and written through to the
/// cache, overwriting any existing entry. With cache reads disabled the
/// recompute-and-overwrite happens even for motifs already cached.
///
/// Rejection is strict: `score > threshold`, never `>=`.
///
/// # Errors
///
/// Propagates [`ScoringError`] from the scorer.
pub fn check_motif(
    motif: &Motif,
    threshold: f64,
    use_cached_scores: bool,
    cache: &mut ScoreCache,
) -> Result<MotifVerdict, ScoringError> {
    if use_cached_scores {
        if let Some(score) = cache.get(motif.as_str()) {
            return Ok(MotifVerdict {
                is_valid: score <= threshold,
                score,
                from_cache: true,
            });
        }
    }

    let score = flexible_score(motif, None)?;
    cache.insert(motif.as_str(), score);

    Ok(MotifVerdict {
        is_valid: score <= threshold,
        score,
        from_cache: false,
    })
}
