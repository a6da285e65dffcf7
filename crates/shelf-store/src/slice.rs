//! State slice
//!
//! A [`Slice`] owns one [`RankedCollection`] and applies dispatched
//! [`Action`]s to it. Each dispatch runs to completion before the new
//! state is published; on any error the previous state stays in place.

use crate::action::{reduce, Action};
use crate::config::{NotFoundPolicy, StoreConfig};
use crate::error::{StoreError, StoreResult};
use shelf_rank::{Ranked, RankedCollection};

/// Result of a successful dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// State replaced by the reducer output
    Applied,

    /// Unknown id tolerated under [`NotFoundPolicy::Ignore`]; state unchanged
    Ignored,
}

impl DispatchOutcome {
    /// Check if the state changed hands
    #[inline]
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// O(1) snapshot of a slice's state
#[derive(Debug, Clone)]
pub struct Checkpoint<T: Ranked> {
    state: RankedCollection<T>,
}

impl<T: Ranked> Checkpoint<T> {
    /// Snapshotted collection
    #[inline]
    #[must_use]
    pub fn state(&self) -> &RankedCollection<T> {
        &self.state
    }
}

/// One ordered collection plus its dispatch rules
#[derive(Debug, Clone)]
pub struct Slice<T: Ranked> {
    state: RankedCollection<T>,
    config: StoreConfig,
}

impl<T: Ranked> Slice<T> {
    /// Create empty, unfetched slice
    #[inline]
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            state: RankedCollection::new(),
            config,
        }
    }

    /// Current collection
    #[inline]
    #[must_use]
    pub fn state(&self) -> &RankedCollection<T> {
        &self.state
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Apply an action
    ///
    /// # Errors
    /// - [`StoreError::Rank`] for duplicate inserts, and for unknown ids
    ///   under [`NotFoundPolicy::Reject`]
    /// - [`StoreError::Drift`] when `verify_after_dispatch` is set and the
    ///   resulting state breaks the dense rank invariant
    pub fn dispatch(&mut self, action: Action<T>) -> StoreResult<DispatchOutcome> {
        let name = action.name();
        let _span = tracing::debug_span!("dispatch", kind = T::KIND, action = name).entered();

        let is_load = matches!(action, Action::SetList { .. });
        let is_clear = matches!(action, Action::Clear);
        let next = match reduce(&self.state, action) {
            Ok(next) => next,
            Err(err) if err.is_not_found() && self.config.not_found == NotFoundPolicy::Ignore => {
                tracing::warn!(%err, "ignoring {name} for unknown id");
                return Ok(DispatchOutcome::Ignored);
            }
            Err(err) => {
                tracing::debug!(%err, "{name} rejected");
                return Err(err.into());
            }
        };

        let next = if is_load { self.loaded(next) } else { next };

        if self.config.verify_after_dispatch {
            if let Err(err) = next.verify() {
                tracing::error!(%err, "{name} left ranks drifted; keeping previous state");
                return Err(StoreError::drift(name, err));
            }
        }

        if is_clear {
            tracing::info!("cleared {} {}", self.state.len(), T::KIND);
        } else {
            tracing::debug!(len = next.len(), "{name} applied");
        }

        self.state = next;
        Ok(DispatchOutcome::Applied)
    }

    /// Post-process a list load
    fn loaded(&self, next: RankedCollection<T>) -> RankedCollection<T> {
        tracing::info!(len = next.len(), fetched = next.is_fetched(), "loaded {} list", T::KIND);

        if !self.config.heal_on_load {
            return next;
        }

        match next.verify() {
            Ok(()) => next,
            Err(err) => {
                tracing::warn!(%err, "renumbering drifted {} list", T::KIND);
                next.renumbered()
            }
        }
    }

    /// Snapshot the current state
    #[inline]
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint<T> {
        Checkpoint {
            state: self.state.clone(),
        }
    }

    /// Restore a snapshot, discarding everything dispatched since
    pub fn rollback(&mut self, checkpoint: Checkpoint<T>) {
        tracing::info!(
            from = self.state.len(),
            to = checkpoint.state.len(),
            "rolling back {}",
            T::KIND
        );
        self.state = checkpoint.state;
    }
}

impl<T: Ranked> Default for Slice<T> {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
