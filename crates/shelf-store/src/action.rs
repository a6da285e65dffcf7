//! Inbound actions and the pure reducer

use serde::{Deserialize, Serialize};
use shelf_rank::{RankResult, Ranked, RankedCollection};

/// Action dispatched against one slice
///
/// Serialized with a `type` tag so action logs can be replayed:
///
/// ```json
/// {"type": "remove", "id": "c-7"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
#[serde(bound(
    serialize = "T: Serialize, T::Id: Serialize",
    deserialize = "T: Deserialize<'de>, T::Id: Deserialize<'de>"
))]
pub enum Action<T: Ranked> {
    /// Replace the collection with a backend list
    SetList {
        /// Entities as returned by the backend
        data: Vec<T>,
        /// Value for the fetched flag
        #[serde(rename = "fetchedStatus")]
        fetched_status: bool,
    },

    /// Mirror a server-confirmed create
    Add(T),

    /// Mirror a server-confirmed update (fields, rank, partition)
    Update(T),

    /// Mirror a server-confirmed delete
    Remove {
        /// Entity id
        id: T::Id,
    },

    /// Drop everything (logout, invalidation)
    Clear,
}

impl<T: Ranked> Action<T> {
    /// Action name for logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetList { .. } => "setList",
            Self::Add(_) => "add",
            Self::Update(_) => "update",
            Self::Remove { .. } => "remove",
            Self::Clear => "clear",
        }
    }

    /// Create a fetched list load
    #[must_use]
    pub fn loaded(data: Vec<T>) -> Self {
        Self::SetList {
            data,
            fetched_status: true,
        }
    }

    /// Create a remove action
    #[must_use]
    pub fn remove(id: T::Id) -> Self {
        Self::Remove { id }
    }
}

/// Apply one action to a collection
///
/// # Errors
/// Propagates [`RankError`](shelf_rank::RankError) from the collection;
/// the input collection is never modified.
pub fn reduce<T: Ranked>(
    state: &RankedCollection<T>,
    action: Action<T>,
) -> RankResult<RankedCollection<T>> {
    match action {
        Action::SetList {
            data,
            fetched_status,
        } => Ok(state.set_list(data, fetched_status)),
        Action::Add(entity) => state.insert(entity),
        Action::Update(entity) => state.update(entity),
        Action::Remove { id } => state.remove(&id),
        Action::Clear => Ok(state.clear()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_test_utils::{item, items, pairs, ranks_of, TestItem};

    #[test]
    fn reduce_routes_each_action() {
        let state = items(&["a", "b"]);

        let state = reduce(&state, Action::Add(item("c", 1))).unwrap();
        assert_eq!(ranks_of(&state, &()), pairs(&[("c", 1), ("a", 2), ("b", 3)]));

        let state = reduce(&state, Action::Update(item("c", 3))).unwrap();
        assert_eq!(ranks_of(&state, &()), pairs(&[("a", 1), ("b", 2), ("c", 3)]));

        let state = reduce(&state, Action::remove("a".to_string())).unwrap();
        assert_eq!(ranks_of(&state, &()), pairs(&[("b", 1), ("c", 2)]));

        let state = reduce(&state, Action::Clear).unwrap();
        assert!(state.is_empty());
        assert!(!state.is_fetched());

        let state = reduce(&state, Action::loaded(vec![item("z", 1)])).unwrap();
        assert!(state.is_fetched());
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn reduce_leaves_input_on_error() {
        let state = items(&["a"]);
        let result = reduce(&state, Action::<TestItem>::remove("zz".to_string()));

        assert!(result.is_err());
        assert_eq!(ranks_of(&state, &()), pairs(&[("a", 1)]));
    }

    #[test]
    fn names() {
        assert_eq!(Action::<TestItem>::Clear.name(), "clear");
        assert_eq!(Action::loaded(Vec::<TestItem>::new()).name(), "setList");
    }
}
