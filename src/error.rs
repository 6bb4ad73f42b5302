//! Error types shared by storage, snapshots and fetching

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SnapshotError>;

#[derive(Error, Debug)]
pub enum SnapshotError {
    /// A required fetch (people, quote, creature) failed
    #[error("Network failure: {0}")]
    NetworkFailure(String),
    /// The "about" fetch failed; recovered locally, never aborts a load
    #[error("Degraded fetch: {0}")]
    DegradedFetch(String),
    /// Save attempted before the profile is fully loaded
    #[error("Cannot save, data not loaded yet (missing: {})", .missing.join(", "))]
    IncompleteState { missing: Vec<&'static str> },
    /// Stored collection exists but is not valid
    #[error("Saved snapshots are corrupt: {0}")]
    CorruptStore(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    /// Page element missing or rejected a mutation
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<reqwest::Error> for SnapshotError {
    fn from(e: reqwest::Error) -> Self {
        Self::NetworkFailure(e.to_string())
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_state_names_missing_fields() {
        let err = SnapshotError::IncompleteState {
            missing: vec!["quote", "about"],
        };
        assert_eq!(
            err.to_string(),
            "Cannot save, data not loaded yet (missing: quote, about)"
        );
    }
}
