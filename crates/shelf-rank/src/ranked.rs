//! Entity adapter trait
//!
//! [`Ranked`] is the seam between a concrete entity type and the generic
//! dense-rank algorithms. An adapter supplies the id accessor, the rank
//! accessor and setter, and the partition key.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Rank value (1-based within a partition)
pub type Rank = u32;

/// An entity that lives in a [`RankedCollection`](crate::RankedCollection)
///
/// # Example
///
/// ```rust
/// use shelf_rank::{Rank, Ranked};
///
/// #[derive(Debug, Clone)]
/// struct Banner {
///     id: String,
///     sort_order: Rank,
/// }
///
/// impl Ranked for Banner {
///     type Id = String;
///     type Partition = ();
///
///     const KIND: &'static str = "banner";
///
///     fn id(&self) -> &String {
///         &self.id
///     }
///
///     fn rank(&self) -> Rank {
///         self.sort_order
///     }
///
///     fn set_rank(&mut self, rank: Rank) {
///         self.sort_order = rank;
///     }
///
///     fn partition(&self) {}
/// }
/// ```
pub trait Ranked: Clone + Debug {
    /// Opaque identifier, stable for the entity's lifetime
    type Id: Clone + Eq + Hash + Debug + Display;

    /// Scope within which ranks must be dense
    ///
    /// Entities without a parent use `()`, a single implicit partition.
    type Partition: Clone + Eq + Hash + Debug;

    /// Entity kind label used in errors and logs
    const KIND: &'static str;

    /// Whether a wholesale list load sorts by rank instead of storing verbatim
    const SORT_ON_LOAD: bool = false;

    /// Entity identifier
    fn id(&self) -> &Self::Id;

    /// Current rank
    fn rank(&self) -> Rank;

    /// Overwrite the rank
    fn set_rank(&mut self, rank: Rank);

    /// Partition this entity belongs to
    fn partition(&self) -> Self::Partition;

    /// Builder-style rank override
    #[must_use]
    fn with_rank(mut self, rank: Rank) -> Self
    where
        Self: Sized,
    {
        self.set_rank(rank);
        self
    }
}
