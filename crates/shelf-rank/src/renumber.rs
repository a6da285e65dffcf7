//! Shift and renumbering passes
//!
//! Every pass here is scoped to a single partition: members of other
//! partitions are never read for ordering and never written.

use crate::ranked::{Rank, Ranked};
use im::Vector;
use std::ops::RangeBounds;

/// Direction of a shift pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shift {
    /// Increment ranks (make room ahead)
    Up,
    /// Decrement ranks (close a gap)
    Down,
}

/// Storage slots occupied by members of `partition`, in storage order
pub(crate) fn slots<T: Ranked>(items: &Vector<T>, partition: &T::Partition) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.partition() == *partition)
        .map(|(index, _)| index)
        .collect()
}

/// Shift every member of `partition` whose rank falls in `range`
///
/// The member stored at `skip` (the entity being moved) is left alone.
pub(crate) fn shift<T, R>(
    items: &mut Vector<T>,
    partition: &T::Partition,
    range: R,
    direction: Shift,
    skip: Option<usize>,
) where
    T: Ranked,
    R: RangeBounds<Rank>,
{
    for (index, item) in items.iter_mut().enumerate() {
        if Some(index) == skip || item.partition() != *partition {
            continue;
        }

        let rank = item.rank();
        if !range.contains(&rank) {
            continue;
        }

        let shifted = match direction {
            Shift::Up => rank.saturating_add(1),
            Shift::Down => rank.saturating_sub(1),
        };
        item.set_rank(shifted);
    }
}

/// Positional renumbering pass
///
/// Sorts the partition ascending by current rank (stable, so ties keep
/// storage order), reassigns `1..=n` and lays the members back into the
/// slots the partition already occupied.
///
/// Returns the number of members whose rank had to be corrected.
pub(crate) fn renumber<T: Ranked>(items: &mut Vector<T>, partition: &T::Partition) -> usize {
    let slots = slots(items, partition);
    let mut members: Vec<T> = slots.iter().map(|&slot| items[slot].clone()).collect();
    members.sort_by_key(T::rank);

    let mut corrected = 0;
    for (position, (slot, mut member)) in slots.into_iter().zip(members).enumerate() {
        let rank = position_rank(position);
        if member.rank() != rank {
            corrected += 1;
            member.set_rank(rank);
        }
        if let Some(entry) = items.get_mut(slot) {
            *entry = member;
        }
    }

    if corrected > 0 {
        tracing::trace!(
            kind = T::KIND,
            partition = ?partition,
            corrected,
            "renumbering pass corrected ranks"
        );
    }

    corrected
}

/// Rank for a zero-based position
#[inline]
pub(crate) fn position_rank(position: usize) -> Rank {
    Rank::try_from(position + 1).unwrap_or(Rank::MAX)
}
