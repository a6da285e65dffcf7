//! Shelf Rank
//!
//! Dense-rank ordered collections with partition-scoped renumbering.
//!
//! # Core Concepts
//!
//! - [`Ranked`]: adapter trait supplying id, rank and partition key
//! - [`RankedCollection`]: persistent collection that keeps every partition
//!   ranked exactly `1..=n` across insert, update and remove
//! - [`RankError`]: not-found, duplicate-id and drift errors
//!
//! # Example
//!
//! ```rust
//! use shelf_rank::{Rank, Ranked, RankedCollection};
//!
//! #[derive(Debug, Clone)]
//! struct Tile {
//!     id: u32,
//!     rank: Rank,
//! }
//!
//! impl Ranked for Tile {
//!     type Id = u32;
//!     type Partition = ();
//!
//!     const KIND: &'static str = "tile";
//!
//!     fn id(&self) -> &u32 {
//!         &self.id
//!     }
//!
//!     fn rank(&self) -> Rank {
//!         self.rank
//!     }
//!
//!     fn set_rank(&mut self, rank: Rank) {
//!         self.rank = rank;
//!     }
//!
//!     fn partition(&self) {}
//! }
//!
//! let tiles = RankedCollection::from_list(
//!     vec![Tile { id: 1, rank: 1 }, Tile { id: 2, rank: 2 }],
//!     true,
//! );
//!
//! // Insert at the head; everyone else moves down one
//! let tiles = tiles.insert(Tile { id: 3, rank: 1 }).unwrap();
//! let ids: Vec<u32> = tiles.ranked().iter().map(|t| t.id).collect();
//! assert_eq!(ids, vec![3, 1, 2]);
//! assert!(tiles.verify().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod collection;
mod error;
mod ranked;
mod renumber;

// Re-exports
pub use collection::RankedCollection;
pub use error::{RankError, RankResult};
pub use ranked::{Rank, Ranked};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
