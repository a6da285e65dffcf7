//! Shelf Catalog - storefront back-office ordering state
//!
//! The admin back-office keeps five ordered collections in memory:
//! - categories
//! - subcategories, ranked per parent category
//! - hero sections
//! - featured sections
//! - client logos (sorted on load)
//!
//! Each is a [`Slice`](shelf_store::Slice) over a dense-rank collection;
//! [`CatalogStore`] routes [`CatalogAction`]s to them.
//!
//! # Example
//!
//! ```rust
//! use shelf_catalog::{CatalogAction, CatalogStore, Subcategory};
//! use shelf_store::{Action, StoreConfig};
//!
//! let mut store = CatalogStore::new(StoreConfig::new());
//! store
//!     .dispatch(CatalogAction::Subcategories(Action::loaded(vec![
//!         Subcategory::new("s1", "Boots", "c1", 1),
//!         Subcategory::new("s2", "Sandals", "c1", 2),
//!         Subcategory::new("s3", "Totes", "c2", 1),
//!     ])))
//!     .unwrap();
//!
//! // Move Sandals into c2, at the top
//! store
//!     .dispatch(CatalogAction::Subcategories(Action::Update(
//!         Subcategory::new("s2", "Sandals", "c2", 1),
//!     )))
//!     .unwrap();
//!
//! let c2: Vec<_> = shelf_catalog::subcategories_of(&store, "c2")
//!     .iter()
//!     .map(|s| (s.id.as_str(), s.sortorder))
//!     .collect();
//! assert_eq!(c2, vec![("s2", 1), ("s3", 2)]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod entities;
pub mod replay;
pub mod selectors;
pub mod store;

// Re-exports for convenience
pub use entities::{Category, ClientLogo, FeaturedSection, HeroSection, Subcategory};
pub use replay::{load_log, parse_log, replay, ReplayError, ReplayStats};
pub use selectors::{
    next_sort_order, select_options, sort_order_choices, subcategories_of, Labelled, SelectOption,
};
pub use store::{CatalogAction, CatalogStore, CatalogView, SliceView};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
