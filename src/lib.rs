//! # vntr-filter
//!
//! A library for deciding whether a candidate variable-number-tandem-repeat
//! (VNTR) motif is really a short-tandem-repeat (STR) in disguise.
//!
//! Repeat callers routinely emit VNTR candidates whose motif is itself so
//! internally repetitive that the locus is better described as an STR.
//! `vntr-filter` quantifies this with a **complexity score**: mask a small
//! subset of the motif's positions with a wildcard, compare the masked
//! motif against every non-trivial cyclic rotation of itself, and take the
//! best normalized match fraction over all mask choices and rotations. A
//! score of 1.0 means a perfect self-repeat exists under the allowed
//! masking; candidates scoring above a threshold are rejected.
//!
//! ## Features
//!
//! - **Wildcard-aware similarity**: masked positions match any symbol
//! - **Flexible masking**: subset size scales with motif length
//! - **Early exit**: search stops the moment a perfect repeat is found
//! - **Long-motif fallback**: motifs over 40 symbols use single-position
//!   masking to keep the search tractable
//! - **Score caching**: computed scores persist between runs as JSON
//!
//! ## Example
//!
//! ```rust
//! use vntr_filter::{check_motif, Motif, ScoreCache, DEFAULT_COMPLEXITY_THRESHOLD};
//!
//! let mut cache = ScoreCache::new();
//!
//! // An exact 2-fold repeat of "ATG": maximally STR-like.
//! let motif = Motif::new("ATGATG").unwrap();
//! let verdict = check_motif(&motif, DEFAULT_COMPLEXITY_THRESHOLD, true, &mut cache).unwrap();
//! assert!(!verdict.is_valid);
//! assert_eq!(verdict.score, 1.0);
//!
//! // A non-repetitive motif passes.
//! let motif = Motif::new("ACGT").unwrap();
//! let verdict = check_motif(&motif, DEFAULT_COMPLEXITY_THRESHOLD, true, &mut cache).unwrap();
//! assert!(verdict.is_valid);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Motif and masked-motif data types
//! - [`scoring`]: Pairwise similarity and complexity scorers
//! - [`filter`]: Threshold decision layer with cache write-through
//! - [`cache`]: Score cache storage and JSON persistence
//! - [`cli`]: Command-line interface implementation

pub mod cache;
pub mod cli;
pub mod core;
pub mod filter;
pub mod scoring;

// Re-export commonly used types for convenience
pub use cache::store::ScoreCache;
pub use core::motif::{MaskedMotif, MaskedSymbol, Motif, MotifError};
pub use filter::validity::{check_motif, MotifVerdict, DEFAULT_COMPLEXITY_THRESHOLD};
pub use scoring::complexity::{flexible_score, single_mask_score, ScoringStats};
pub use scoring::similarity::normalized_similarity;
pub use scoring::ScoringError;
