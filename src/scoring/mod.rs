//! Motif self-similarity scoring.
//!
//! This module implements the complexity score used to decide whether a
//! candidate VNTR motif is really an STR in disguise:
//!
//! 1. **Pairwise similarity** ([`similarity::normalized_similarity`]):
//!    wildcard-aware, position-by-position match fraction of two
//!    equal-length symbol sequences.
//! 2. **Single-position masking** ([`complexity::single_mask_score`]):
//!    masks one position at a time and compares the masked motif against
//!    all of its non-identity cyclic rotations.
//! 3. **Flexible masking** ([`complexity::flexible_score`]): masks a
//!    configurable number of positions simultaneously over every position
//!    subset, with an early exit at 1.0 and a single-position fallback for
//!    motifs longer than 40 symbols.
//!
//! The score is the maximum match fraction found, in `[0, 1]`; 1.0 means a
//! perfect non-trivial self-repeat exists under the allowed masking.

pub mod complexity;
pub mod similarity;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("cannot compare zero-length sequence windows")]
    EmptyInput,

    #[error("cannot mask {requested} positions of a {motif_len}-symbol motif")]
    InvalidMaskCount { requested: usize, motif_len: usize },
}

pub use complexity::{flexible_score, single_mask_score, ScoringStats};
pub use similarity::normalized_similarity;
