//! Error types for state slices

use shelf_rank::RankError;
use std::path::PathBuf;

/// Errors surfaced by [`Slice::dispatch`](crate::Slice::dispatch) and config loading
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Collection operation rejected
    #[error("rank error: {0}")]
    Rank(#[from] RankError),

    /// Post-dispatch verification found a broken invariant
    #[error("drift detected after {action}: {source}")]
    Drift {
        /// Action that produced the drifted state
        action: &'static str,
        /// Verification failure
        #[source]
        source: RankError,
    },

    /// Config text could not be parsed
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Create drift error for an action
    pub fn drift(action: &'static str, source: RankError) -> Self {
        Self::Drift { action, source }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if error is a rejected not-found
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Rank(err) if err.is_not_found())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_error_conversion() {
        let err: StoreError = RankError::NotFound {
            kind: "category",
            id: "c1".to_string(),
        }
        .into();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "rank error: category not found: c1");
    }

    #[test]
    fn drift_display() {
        let err = StoreError::drift(
            "setList",
            RankError::Drift {
                kind: "category",
                partition: "()".to_string(),
                ranks: vec![2],
            },
        );

        assert!(err.to_string().starts_with("drift detected after setList"));
        assert!(!err.is_not_found());
    }
}
