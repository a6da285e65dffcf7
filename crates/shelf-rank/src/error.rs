//! Error types for ranked collections

use crate::ranked::{Rank, Ranked};

/// Errors raised by [`RankedCollection`](crate::RankedCollection) operations
///
/// A failed operation never changes the collection it was called on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// No entity with this id
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind
        kind: &'static str,
        /// Requested id
        id: String,
    },

    /// Insert of an id that is already present
    #[error("{kind} already present: {id}")]
    DuplicateId {
        /// Entity kind
        kind: &'static str,
        /// Offending id
        id: String,
    },

    /// Ranks in a partition are not exactly `1..=n`
    #[error("{kind} ranks drifted in partition {partition}: {ranks:?}")]
    Drift {
        /// Entity kind
        kind: &'static str,
        /// Partition key (debug rendering)
        partition: String,
        /// Observed ranks, ascending
        ranks: Vec<Rank>,
    },
}

impl RankError {
    /// Create not-found error for an entity id
    pub fn not_found<T: Ranked>(id: &T::Id) -> Self {
        Self::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
    }

    /// Create duplicate-id error for an entity id
    pub fn duplicate<T: Ranked>(id: &T::Id) -> Self {
        Self::DuplicateId {
            kind: T::KIND,
            id: id.to_string(),
        }
    }

    /// Create drift error for a partition
    pub fn drift<T: Ranked>(partition: &T::Partition, ranks: Vec<Rank>) -> Self {
        Self::Drift {
            kind: T::KIND,
            partition: format!("{partition:?}"),
            ranks,
        }
    }

    /// Check if error is a not-found
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for ranked collection operations
pub type RankResult<T> = Result<T, RankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = RankError::NotFound {
            kind: "category",
            id: "c-9".to_string(),
        };
        assert_eq!(err.to_string(), "category not found: c-9");
        assert!(err.is_not_found());
    }

    #[test]
    fn drift_display() {
        let err = RankError::Drift {
            kind: "subcategory",
            partition: "\"cat-1\"".to_string(),
            ranks: vec![1, 3],
        };
        assert_eq!(
            err.to_string(),
            "subcategory ranks drifted in partition \"cat-1\": [1, 3]"
        );
        assert!(!err.is_not_found());
    }
}
