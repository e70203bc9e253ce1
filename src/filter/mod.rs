//! VNTR validity decision layer.
//!
//! Wraps the complexity scorer with score-cache lookup and a threshold
//! rule: a motif whose complexity score strictly exceeds the threshold is
//! judged too self-similar (STR-like) and the candidate VNTR is rejected.

pub mod validity;

pub use validity::{check_motif, MotifVerdict, DEFAULT_COMPLEXITY_THRESHOLD};
