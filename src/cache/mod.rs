//! Score cache storage and persistence.
//!
//! Scoring a motif is combinatorially expensive, so computed complexity
//! scores are kept in a [`ScoreCache`]: an in-memory map from motif
//! sequence to score that the decision layer reads and writes through.
//! The cache can be persisted as a versioned JSON document between runs.
//!
//! The cache is a plain handle with no interior locking; callers that
//! score motifs from multiple threads must wrap it themselves.

pub mod store;

pub use store::{CacheError, ScoreCache};
