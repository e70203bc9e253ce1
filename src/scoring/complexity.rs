use itertools::Itertools;
use tracing::debug;

use crate::core::motif::Motif;
use crate::scoring::similarity::normalized_similarity;
use crate::scoring::ScoringError;

/// Motifs longer than this skip exhaustive subset masking and fall back to
/// single-position masking. Kept at 40 for compatibility with existing
/// score caches.
pub const LONG_MOTIF_LEN: usize = 40;

/// Default number of masked positions: one per ten motif symbols, rounded
/// up, minimum 1.
#[must_use]
pub fn default_mask_count(motif_len: usize) -> usize {
    motif_len.div_ceil(10).max(1)
}

/// Search counters reported alongside a flexible-masking score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringStats {
    /// Position subsets whose masked motif was evaluated.
    pub subsets_evaluated: usize,
    /// Pairwise rotation comparisons performed.
    pub comparisons: usize,
    /// Whether the long-motif fallback replaced subset enumeration.
    pub used_fallback: bool,
}

/// Maximum self-similarity of a motif with exactly one position masked.
///
/// Every position is masked in turn and the masked motif is compared
/// against each of its non-identity cyclic rotations; the identity
/// rotation is excluded since it would trivially score 1.0. The global
/// maximum over all positions and rotations is returned.
///
/// # Errors
///
/// Propagates [`ScoringError`] from the pairwise comparison.
pub fn single_mask_score(motif: &Motif) -> Result<f64, ScoringError> {
    let mut best: f64 = 0.0;
    for pos in 0..motif.len() {
        let masked = motif.mask(&[pos]);
        let window = masked.doubled_window();
        for offset in 1..masked.len() {
            let rotation = &window[offset..offset + masked.len()];
            best = best.max(normalized_similarity(masked.symbols(), rotation)?);
        }
    }
    Ok(best)
}

/// Maximum self-similarity under simultaneous masking of `num_masked`
/// positions (default [`default_mask_count`]).
///
/// Enumerates every position subset of the requested size lazily, masks
/// all chosen positions at once, and evaluates every non-identity cyclic
/// rotation of the masked motif against itself. Returns the global
/// maximum, stopping the entire search as soon as 1.0 is reached since no
/// later subset can improve on it.
///
/// Motifs longer than [`LONG_MOTIF_LEN`] delegate to
/// [`single_mask_score`]; full subset enumeration is too expensive there.
///
/// # Errors
///
/// Returns [`ScoringError::InvalidMaskCount`] when `num_masked` exceeds
/// the motif length, and propagates comparison errors.
pub fn flexible_score(
    motif: &Motif,
    num_masked: Option<usize>,
) -> Result<f64, ScoringError> {
    flexible_score_with_stats(motif, num_masked).map(|(score, _)| score)
}

/// [`flexible_score`] with search counters, used by callers that report
/// how much work the search did and by early-exit tests.
pub fn flexible_score_with_stats(
    motif: &Motif,
    num_masked: Option<usize>,
) -> Result<(f64, ScoringStats), ScoringError> {
    let mut stats = ScoringStats::default();

    if motif.len() > LONG_MOTIF_LEN {
        debug!(
            motif = motif.as_str(),
            len = motif.len(),
            "long motif: falling back to single-position masking"
        );
        stats.used_fallback = true;
        let score = single_mask_score(motif)?;
        return Ok((score, stats));
    }

    let mask_count = num_masked.unwrap_or_else(|| default_mask_count(motif.len()));
    if mask_count > motif.len() {
        return Err(ScoringError::InvalidMaskCount {
            requested: mask_count,
            motif_len: motif.len(),
        });
    }

    let mut best: f64 = 0.0;
    for combination in (0..motif.len()).combinations(mask_count) {
        stats.subsets_evaluated += 1;
        let masked = motif.mask(&combination);
        let window = masked.doubled_window();
        for offset in 1..masked.len() {
            stats.comparisons += 1;
            let rotation = &window[offset..offset + masked.len()];
            best = best.max(normalized_similarity(masked.symbols(), rotation)?);
            if best == 1.0 {
                // Maximum possible score; no other subset can beat it.
                return Ok((1.0, stats));
            }
        }
    }

    Ok((best, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motif(seq: &str) -> Motif {
        Motif::new(seq).unwrap()
    }

    const HOMOPOLYMER_LIKE: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAATTTAA";

    #[test]
    fn test_exact_tandem_repeat_scores_one() {
        // ATG repeated twice: rotating by 3 aligns perfectly.
        let score = flexible_score(&motif("ATGATG"), None).unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_known_scores() {
        // Reference values from the production filter.
        let cases = [
            ("ACGT", 0.5),
            ("ATG", 2.0 / 3.0),
            ("ACGTACGGT", 2.0 / 3.0),
            ("AGGGTCA", 5.0 / 7.0),
            ("AT", 1.0),
        ];
        for (seq, expected) in cases {
            let score = flexible_score(&motif(seq), None).unwrap();
            assert!(
                (score - expected).abs() < 1e-12,
                "{seq}: got {score}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_score_stays_in_unit_interval() {
        for seq in ["A", "AC", "ACGT", "AGGTCCA", "ACGTACGGTTTT", HOMOPOLYMER_LIKE] {
            let score = flexible_score(&motif(seq), None).unwrap();
            assert!((0.0..=1.0).contains(&score), "{seq}: {score}");
        }
    }

    #[test]
    fn test_homopolymer_like_single_mask() {
        // 37 symbols, strong internal repetition: one mask rescues all but
        // one of the T/A boundary mismatches.
        let m = motif(HOMOPOLYMER_LIKE);
        assert_eq!(m.len(), 37);

        let expected = 36.0 / 37.0;
        let single = single_mask_score(&m).unwrap();
        assert!((single - expected).abs() < 1e-12);

        let flexible = flexible_score(&m, Some(1)).unwrap();
        assert!((flexible - expected).abs() < 1e-12);
    }

    #[test]
    fn test_single_symbol_motif_has_no_rotations() {
        assert_eq!(single_mask_score(&motif("A")).unwrap(), 0.0);
        assert_eq!(flexible_score(&motif("A"), None).unwrap(), 0.0);
    }

    #[test]
    fn test_default_mask_count() {
        assert_eq!(default_mask_count(1), 1);
        assert_eq!(default_mask_count(6), 1);
        assert_eq!(default_mask_count(10), 1);
        assert_eq!(default_mask_count(11), 2);
        assert_eq!(default_mask_count(40), 4);
    }

    #[test]
    fn test_long_motif_falls_back_to_single_masking() {
        let long = motif(&format!("{}TT", "ACGTTGCA".repeat(5)));
        assert!(long.len() > LONG_MOTIF_LEN);

        let (score, stats) = flexible_score_with_stats(&long, None).unwrap();
        assert!(stats.used_fallback);
        assert_eq!(stats.subsets_evaluated, 0);
        assert_eq!(score, single_mask_score(&long).unwrap());
        assert!((score - 34.0 / 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_early_exit_stops_subset_enumeration() {
        // Masking position 0 of ATGATG already reaches 1.0 at rotation
        // offset 3, so only the very first of C(6,1)=6 subsets runs.
        let (score, stats) = flexible_score_with_stats(&motif("ATGATG"), Some(1)).unwrap();
        assert_eq!(score, 1.0);
        assert_eq!(stats.subsets_evaluated, 1);
        assert_eq!(stats.comparisons, 3);
    }

    #[test]
    fn test_masking_every_position_scores_one() {
        // All-wildcard motif matches any rotation of itself.
        assert_eq!(flexible_score(&motif("ACGT"), Some(4)).unwrap(), 1.0);
    }

    #[test]
    fn test_mask_count_beyond_length_is_an_error() {
        let err = flexible_score(&motif("ATGATG"), Some(7)).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::InvalidMaskCount {
                requested: 7,
                motif_len: 6
            }
        ));
    }

    #[test]
    fn test_zero_masked_positions_is_plain_rotation_search() {
        // An unmasked exact tandem repeat still scores 1.0.
        assert_eq!(flexible_score(&motif("ATGATG"), Some(0)).unwrap(), 1.0);
        // No rotation of ACGT matches it anywhere without a wildcard.
        assert_eq!(flexible_score(&motif("ACGT"), Some(0)).unwrap(), 0.0);
    }
}
