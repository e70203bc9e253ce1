use tracing::warn;

use crate::core::motif::MaskedSymbol;
use crate::scoring::ScoringError;

/// Safely convert usize to f64 for fraction calculations
///
/// This function explicitly handles the precision loss that occurs when
/// converting usize to f64 on 64-bit platforms. Motif lengths are tiny
/// relative to the f64 mantissa, so the conversion is exact in practice.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Normalized wildcard-aware similarity of two symbol sequences.
///
/// A position counts as a match when the symbols are equal or either side
/// is the wildcard. The result is the match count divided by the window
/// length, in `[0, 1]`.
///
/// Intended for equal-length inputs. When the lengths differ the window is
/// truncated to the shorter sequence and a warning is logged; the
/// comparison still proceeds.
///
/// # Errors
///
/// Returns [`ScoringError::EmptyInput`] when the comparison window is
/// empty, since the fraction would be undefined.
pub fn normalized_similarity(
    a: &[MaskedSymbol],
    b: &[MaskedSymbol],
) -> Result<f64, ScoringError> {
    if a.len() != b.len() {
        warn!(
            left_len = a.len(),
            right_len = b.len(),
            "computing sequence similarity between sequences of different lengths"
        );
    }
    let window_len = a.len().min(b.len());
    if window_len == 0 {
        return Err(ScoringError::EmptyInput);
    }

    let matches = a
        .iter()
        .zip(b.iter())
        .filter(|(x, y)| x.matches(**y))
        .count();

    Ok(count_to_f64(matches) / count_to_f64(window_len))
}
