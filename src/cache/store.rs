use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to read score cache: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse score cache: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Cache file version for compatibility checking
pub const CACHE_VERSION: &str = "1.0.0";

/// Serializable cache file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheData {
    pub version: String,
    pub created_at: String,
    pub scores: HashMap<String, f64>,
}

/// Mapping from motif sequence to previously computed complexity score.
///
/// Entries are written once per distinct motif during a scoring run and
/// read back on subsequent lookups; nothing inside the core ever
/// invalidates them.
#[derive(Debug, Default)]
pub struct ScoreCache {
    scores: HashMap<String, f64>,
}

impl ScoreCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached score for a motif sequence
    #[must_use]
    pub fn get(&self, motif: &str) -> Option<f64> {
        self.scores.get(motif).copied()
    }

    #[must_use]
    pub fn contains(&self, motif: &str) -> bool {
        self.scores.contains_key(motif)
    }

    /// Insert or overwrite the score for a motif sequence
    pub fn insert(&mut self, motif: impl Into<String>, score: f64) {
        self.scores.insert(motif.into(), score);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Load a persisted cache from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, CacheError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a cache from a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ParseError`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, CacheError> {
        let data: CacheData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CACHE_VERSION {
            warn!(
                expected = CACHE_VERSION,
                found = data.version,
                "score cache version mismatch"
            );
        }

        Ok(Self {
            scores: data.scores,
        })
    }

    /// Export the cache to JSON
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ParseError`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CacheError> {
        let data = CacheData {
            version: CACHE_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            scores: self.scores.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Write the cache to a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if serialization or the write fails.
    pub fn save_to_file(&self, path: &Path) -> Result<(), CacheError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut cache = ScoreCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get("ATGATG"), None);

        cache.insert("ATGATG", 1.0);
        cache.insert("ACGT", 0.5);
        assert_eq!(cache.len(), 2);
        assert!(cache.contains("ACGT"));
        assert_eq!(cache.get("ATGATG"), Some(1.0));

        // Write-through overwrites.
        cache.insert("ACGT", 0.25);
        assert_eq!(cache.get("ACGT"), Some(0.25));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let mut cache = ScoreCache::new();
        cache.insert("ATGATG", 1.0);
        cache.insert("AGGGTCA", 5.0 / 7.0);

        let json = cache.to_json().unwrap();
        let restored = ScoreCache::from_json(&json).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.get("ATGATG"), Some(1.0));
        assert_eq!(restored.get("AGGGTCA"), Some(5.0 / 7.0));
    }

    #[test]
    fn test_version_mismatch_is_not_fatal() {
        let json = r#"{"version":"0.9.0","created_at":"2024-01-01T00:00:00Z","scores":{"ACGT":0.5}}"#;
        let cache = ScoreCache::from_json(json).unwrap();
        assert_eq!(cache.get("ACGT"), Some(0.5));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut cache = ScoreCache::new();
        cache.insert("ACGT", 0.5);
        cache.save_to_file(&path).unwrap();

        let restored = ScoreCache::load_from_file(&path).unwrap();
        assert_eq!(restored.get("ACGT"), Some(0.5));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = ScoreCache::load_from_file(Path::new("/nonexistent/scores.json")).unwrap_err();
        assert!(matches!(err, CacheError::ReadError(_)));
    }
}
