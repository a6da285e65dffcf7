//! Store configuration
//!
//! Built in code with `Default` plus `with_*` builders, or parsed from
//! TOML:
//!
//! ```toml
//! not_found = "reject"
//! verify_after_dispatch = true
//! heal_on_load = true
//! ```

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How update/remove of an unknown id is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundPolicy {
    /// Succeed without changes, log a warning
    #[default]
    Ignore,

    /// Return the not-found error to the caller
    Reject,
}

/// Slice configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Unknown-id handling
    pub not_found: NotFoundPolicy,

    /// Run the invariant check after every dispatch
    pub verify_after_dispatch: bool,

    /// Renumber a loaded list that arrives with gaps or duplicates in rank
    ///
    /// Duplicate ids are not healed; pair with `verify_after_dispatch` to
    /// reject such a payload.
    pub heal_on_load: bool,
}

impl StoreConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With not-found policy
    #[inline]
    #[must_use]
    pub fn with_not_found(mut self, policy: NotFoundPolicy) -> Self {
        self.not_found = policy;
        self
    }

    /// With post-dispatch verification
    #[inline]
    #[must_use]
    pub fn with_verify_after_dispatch(mut self, verify: bool) -> Self {
        self.verify_after_dispatch = verify;
        self
    }

    /// With healing of drifted list loads
    #[inline]
    #[must_use]
    pub fn with_heal_on_load(mut self, heal: bool) -> Self {
        self.heal_on_load = heal;
        self
    }

    /// Parse from TOML text; missing keys take their defaults
    ///
    /// # Errors
    /// Returns [`StoreError::Config`] on malformed TOML or unknown values
    pub fn from_toml_str(text: &str) -> StoreResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the file cannot be read, or
    /// [`StoreError::Config`] if it does not parse
    pub fn from_toml_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| StoreError::io_error(path, source))?;
        Self::from_toml_str(&text)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            not_found: NotFoundPolicy::Ignore,
            verify_after_dispatch: false,
            heal_on_load: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_tolerates_unknown_ids() {
        let config = StoreConfig::new();
        assert_eq!(config.not_found, NotFoundPolicy::Ignore);
        assert!(!config.verify_after_dispatch);
        assert!(!config.heal_on_load);
    }

    #[test]
    fn builders_chain() {
        let config = StoreConfig::new()
            .with_not_found(NotFoundPolicy::Reject)
            .with_verify_after_dispatch(true)
            .with_heal_on_load(true);

        assert_eq!(config.not_found, NotFoundPolicy::Reject);
        assert!(config.verify_after_dispatch);
        assert!(config.heal_on_load);
    }

    #[test]
    fn toml_partial_keys_use_defaults() {
        let config = StoreConfig::from_toml_str("not_found = \"reject\"").unwrap();
        assert_eq!(
            config,
            StoreConfig::new().with_not_found(NotFoundPolicy::Reject)
        );
    }

    #[test]
    fn toml_rejects_unknown_policy() {
        let err = StoreConfig::from_toml_str("not_found = \"explode\"").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn toml_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "verify_after_dispatch = true\nheal_on_load = true").unwrap();

        let config = StoreConfig::from_toml_file(file.path()).unwrap();
        assert!(config.verify_after_dispatch);
        assert!(config.heal_on_load);
        assert_eq!(config.not_found, NotFoundPolicy::Ignore);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = StoreConfig::from_toml_file("/nonexistent/shelf.toml").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
