//! Action log replay
//!
//! An action log is a JSON array of [`CatalogAction`]s. Replaying it into
//! a fresh [`CatalogStore`] reproduces the client state a sequence of
//! dispatches would have produced.

use crate::store::{CatalogAction, CatalogStore};
use shelf_store::{DispatchOutcome, StoreConfig, StoreError};
use std::path::{Path, PathBuf};

/// Errors during log loading or replay
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// Log file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Log is not a JSON array of catalog actions
    #[error("malformed action log: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry was rejected by its slice
    #[error("entry {index} ({slice}/{action}) rejected: {source}")]
    Dispatch {
        index: usize,
        slice: &'static str,
        action: &'static str,
        #[source]
        source: StoreError,
    },
}

/// Summary of a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub applied: usize,
    pub ignored: usize,
}

/// Parse an action log from JSON text
///
/// # Errors
/// Returns [`ReplayError::Parse`] on malformed input
pub fn parse_log(text: &str) -> Result<Vec<CatalogAction>, ReplayError> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse an action log file
///
/// # Errors
/// Returns [`ReplayError::Io`] or [`ReplayError::Parse`]
pub fn load_log(path: impl AsRef<Path>) -> Result<Vec<CatalogAction>, ReplayError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_log(&text)
}

/// Dispatch every action, in order, into a fresh store
///
/// Stops at the first rejected entry.
///
/// # Errors
/// Returns [`ReplayError::Dispatch`] naming the failing entry
pub fn replay(
    actions: Vec<CatalogAction>,
    config: StoreConfig,
) -> Result<(CatalogStore, ReplayStats), ReplayError> {
    let mut store = CatalogStore::new(config);
    let mut stats = ReplayStats::default();

    for (index, action) in actions.into_iter().enumerate() {
        let slice = action.slice();
        let name = action_name(&action);

        match store.dispatch(action) {
            Ok(DispatchOutcome::Applied) => stats.applied += 1,
            Ok(DispatchOutcome::Ignored) => stats.ignored += 1,
            Err(source) => {
                return Err(ReplayError::Dispatch {
                    index,
                    slice,
                    action: name,
                    source,
                })
            }
        }
    }

    tracing::info!(applied = stats.applied, ignored = stats.ignored, "replay finished");
    Ok((store, stats))
}

fn action_name(action: &CatalogAction) -> &'static str {
    match action {
        CatalogAction::Categories(a) => a.name(),
        CatalogAction::Subcategories(a) => a.name(),
        CatalogAction::HeroSections(a) => a.name(),
        CatalogAction::FeaturedSections(a) => a.name(),
        CatalogAction::ClientLogos(a) => a.name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_store::NotFoundPolicy;

    const LOG: &str = r#"[
        {"slice": "categories", "action": {"type": "setList", "fetchedStatus": true, "data": [
            {"id": "c1", "name": "Shoes", "sortorder": 1},
            {"id": "c2", "name": "Bags", "sortorder": 2}
        ]}},
        {"slice": "categories", "action": {"type": "add", "id": "c3", "name": "Hats", "sortorder": 1}},
        {"slice": "categories", "action": {"type": "remove", "id": "missing"}}
    ]"#;

    #[test]
    fn replay_counts_outcomes() {
        let actions = parse_log(LOG).unwrap();
        let (store, stats) = replay(actions, StoreConfig::new()).unwrap();

        assert_eq!(stats, ReplayStats { applied: 2, ignored: 1 });
        let names: Vec<_> = store
            .categories()
            .ranked()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Hats", "Shoes", "Bags"]);
    }

    #[test]
    fn strict_replay_names_failing_entry() {
        let actions = parse_log(LOG).unwrap();
        let config = StoreConfig::new().with_not_found(NotFoundPolicy::Reject);
        let err = replay(actions, config).unwrap_err();

        assert!(matches!(
            err,
            ReplayError::Dispatch {
                index: 2,
                slice: "categories",
                action: "remove",
                ..
            }
        ));
    }

    #[test]
    fn malformed_log_is_parse_error() {
        let err = parse_log(r#"[{"slice": "widgets", "action": {"type": "clear"}}]"#).unwrap_err();
        assert!(matches!(err, ReplayError::Parse(_)));
    }
}
