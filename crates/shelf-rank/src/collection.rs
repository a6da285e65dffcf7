//! Ranked collection
//!
//! [`RankedCollection`] keeps the Dense Rank Invariant across insert,
//! update and remove. Every operation is a pure function: it returns a new
//! collection and leaves the receiver untouched. Storage is an
//! [`im::Vector`], so the old value is an O(1) snapshot.
//!
//! Order of operations is fixed for every mutation: a shift pass scoped to
//! the affected partition, then a positional renumbering pass over that
//! same partition. The renumbering pass is what absorbs drift in data the
//! backend handed us, so it runs even when the shift pass left the
//! partition dense.

use crate::error::{RankError, RankResult};
use crate::ranked::{Rank, Ranked};
use crate::renumber::{self, Shift};
use im::Vector;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;

/// Ordered collection of [`Ranked`] entities plus the fetched flag
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCollection<T: Ranked> {
    /// Entities; within a partition, storage order is rank order
    items: Vector<T>,

    /// Whether the initial load from the backend completed
    fetched: bool,
}

impl<T: Ranked> RankedCollection<T> {
    /// Create empty, unfetched collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vector::new(),
            fetched: false,
        }
    }

    /// Create collection from a backend list
    #[must_use]
    pub fn from_list(items: impl IntoIterator<Item = T>, fetched: bool) -> Self {
        Self::new().set_list(items, fetched)
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Replace the whole collection
    ///
    /// The list is stored verbatim, or stable-sorted by rank when
    /// [`Ranked::SORT_ON_LOAD`] is set. No renumbering happens here.
    #[must_use]
    pub fn set_list(&self, items: impl IntoIterator<Item = T>, fetched: bool) -> Self {
        let mut list: Vec<T> = items.into_iter().collect();
        if T::SORT_ON_LOAD {
            list.sort_by_key(T::rank);
        }

        Self {
            items: list.into_iter().collect(),
            fetched,
        }
    }

    /// Empty the collection and reset the fetched flag
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Insert at the entity's own rank
    ///
    /// # Errors
    /// Returns [`RankError::DuplicateId`] if the id is already present
    pub fn insert(&self, entity: T) -> RankResult<Self> {
        let target = entity.rank();
        self.insert_at(entity, target)
    }

    /// Insert at `target`
    ///
    /// Members of the entity's partition ranked at or after `target` move
    /// up by one. `target` is expected in `1..=n+1`; values outside land at
    /// the nearest end after renumbering.
    ///
    /// # Errors
    /// Returns [`RankError::DuplicateId`] if the id is already present
    pub fn insert_at(&self, mut entity: T, target: Rank) -> RankResult<Self> {
        if self.contains(entity.id()) {
            return Err(RankError::duplicate::<T>(entity.id()));
        }

        let partition = entity.partition();
        let mut items = self.items.clone();

        renumber::shift(&mut items, &partition, target.., Shift::Up, None);
        entity.set_rank(target);
        items.push_back(entity);
        renumber::renumber(&mut items, &partition);

        Ok(self.with_items(items))
    }

    /// Update at the entity's own rank
    ///
    /// # Errors
    /// Returns [`RankError::NotFound`] if the id is unknown
    pub fn update(&self, entity: T) -> RankResult<Self> {
        let target = entity.rank();
        self.update_to(entity, target)
    }

    /// Replace an entity and move it to `target`
    ///
    /// - Same partition, same rank: fields replaced in place.
    /// - Same partition, new rank: the members between the old and new
    ///   rank shift toward the vacated position, then the partition is
    ///   renumbered.
    /// - New partition: the entity leaves its old partition (compacted)
    ///   and is inserted into the new one at `target`.
    ///
    /// # Errors
    /// Returns [`RankError::NotFound`] if the id is unknown
    pub fn update_to(&self, mut entity: T, target: Rank) -> RankResult<Self> {
        let index = self
            .position(entity.id())
            .ok_or_else(|| RankError::not_found::<T>(entity.id()))?;

        let current = &self.items[index];
        let partition = current.partition();

        if entity.partition() != partition {
            return self.detach(index).insert_at(entity, target);
        }

        let old = current.rank();
        let mut items = self.items.clone();

        if target == old {
            entity.set_rank(old);
            items[index] = entity;
            return Ok(self.with_items(items));
        }

        if target > old {
            renumber::shift(&mut items, &partition, old + 1..=target, Shift::Down, Some(index));
        } else {
            renumber::shift(&mut items, &partition, target..old, Shift::Up, Some(index));
        }

        entity.set_rank(target);
        items[index] = entity;
        renumber::renumber(&mut items, &partition);

        Ok(self.with_items(items))
    }

    /// Remove an entity and compact its partition
    ///
    /// # Errors
    /// Returns [`RankError::NotFound`] if the id is unknown
    pub fn remove(&self, id: &T::Id) -> RankResult<Self> {
        let index = self
            .position(id)
            .ok_or_else(|| RankError::not_found::<T>(id))?;

        Ok(self.detach(index))
    }

    /// Copy with every partition densely renumbered
    #[must_use]
    pub fn renumbered(&self) -> Self {
        let mut items = self.items.clone();
        for partition in self.partition_keys() {
            renumber::renumber(&mut items, &partition);
        }
        self.with_items(items)
    }

    /// Drop the entity at `index`; close the gap it leaves behind
    fn detach(&self, index: usize) -> Self {
        let mut items = self.items.clone();
        let removed = items.remove(index);
        let partition = removed.partition();

        renumber::shift(
            &mut items,
            &partition,
            removed.rank().saturating_add(1)..,
            Shift::Down,
            None,
        );
        renumber::renumber(&mut items, &partition);

        self.with_items(items)
    }

    #[inline]
    fn with_items(&self, items: Vector<T>) -> Self {
        Self {
            items,
            fetched: self.fetched,
        }
    }

    // ------------------------------------------------------------------
    // Selectors
    // ------------------------------------------------------------------

    /// Whether the initial load completed
    #[inline]
    #[must_use]
    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    /// Total entity count across partitions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Underlying storage
    #[inline]
    #[must_use]
    pub fn items(&self) -> &Vector<T> {
        &self.items
    }

    /// Iterate in storage order
    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.items.iter()
    }

    /// Lookup by id
    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Check if id is present
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &T::Id) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Members of one partition in rank order
    #[must_use]
    pub fn partition(&self, key: &T::Partition) -> Vec<&T> {
        let mut members: Vec<&T> = self
            .items
            .iter()
            .filter(|item| item.partition() == *key)
            .collect();
        members.sort_by_key(|item| item.rank());
        members
    }

    /// Member count of one partition
    #[must_use]
    pub fn partition_len(&self, key: &T::Partition) -> usize {
        self.items
            .iter()
            .filter(|item| item.partition() == *key)
            .count()
    }

    /// Distinct partition keys in first-seen order
    #[must_use]
    pub fn partition_keys(&self) -> Vec<T::Partition> {
        self.items
            .iter()
            .map(T::partition)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Next available rank in a partition (`n + 1`)
    #[must_use]
    pub fn next_rank(&self, key: &T::Partition) -> Rank {
        renumber::position_rank(self.partition_len(key))
    }

    /// All members grouped by partition (first-seen order), rank order within
    #[must_use]
    pub fn ranked(&self) -> Vec<&T> {
        let mut groups: IndexMap<T::Partition, Vec<&T>> = IndexMap::new();
        for item in &self.items {
            groups.entry(item.partition()).or_default().push(item);
        }

        groups
            .into_values()
            .flat_map(|mut members| {
                members.sort_by_key(|item| item.rank());
                members
            })
            .collect()
    }

    /// Check ids are unique and every partition is ranked exactly `1..=n`
    ///
    /// # Errors
    /// Returns [`RankError::DuplicateId`] or [`RankError::Drift`] for the
    /// first violation found
    pub fn verify(&self) -> RankResult<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id()) {
                return Err(RankError::duplicate::<T>(item.id()));
            }
        }

        for key in self.partition_keys() {
            let mut ranks: Vec<Rank> = self.partition(&key).iter().map(|m| m.rank()).collect();
            ranks.sort_unstable();

            let dense = ranks
                .iter()
                .enumerate()
                .all(|(position, &rank)| rank == renumber::position_rank(position));
            if !dense {
                return Err(RankError::drift::<T>(&key, ranks));
            }
        }

        Ok(())
    }
}

impl<T: Ranked> Default for RankedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Ranked> IntoIterator for &'a RankedCollection<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
