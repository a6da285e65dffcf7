//! Shelf Store
//!
//! Dispatchable state slices over dense-rank collections.
//!
//! # Core Concepts
//!
//! - [`Action`]: inbound `setList` / `add` / `update` / `remove` / `clear`
//! - [`reduce`]: pure mapping from an action onto a collection operation
//! - [`Slice`]: owns one collection, applies actions under a [`StoreConfig`]
//! - [`Checkpoint`]: O(1) snapshot for rolling back optimistic mutations
//!
//! # Example
//!
//! ```rust,ignore
//! use shelf_store::{Action, NotFoundPolicy, Slice, StoreConfig};
//!
//! let config = StoreConfig::new().with_not_found(NotFoundPolicy::Reject);
//! let mut slice = Slice::new(config);
//!
//! slice.dispatch(Action::loaded(fetched_categories))?;
//!
//! let checkpoint = slice.checkpoint();
//! slice.dispatch(Action::Update(moved))?;
//! if backend_rejected {
//!     slice.rollback(checkpoint);
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod action;
mod config;
mod error;
mod slice;

// Re-exports
pub use action::{reduce, Action};
pub use config::{NotFoundPolicy, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use slice::{Checkpoint, DispatchOutcome, Slice};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
