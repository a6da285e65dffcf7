//! Testing utilities for Shelf workspace
//!
//! Shared test fixtures, invariant assertions and proptest strategies.

#![allow(missing_docs)]

use proptest::prelude::*;
use shelf_rank::{Rank, Ranked, RankedCollection};

/// Entity in a single global partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestItem {
    pub id: String,
    pub label: String,
    pub sortorder: Rank,
}

impl Ranked for TestItem {
    type Id = String;
    type Partition = ();

    const KIND: &'static str = "test-item";

    fn id(&self) -> &String {
        &self.id
    }

    fn rank(&self) -> Rank {
        self.sortorder
    }

    fn set_rank(&mut self, rank: Rank) {
        self.sortorder = rank;
    }

    fn partition(&self) {}
}

/// Entity scoped by a parent key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestChild {
    pub id: String,
    pub parent: String,
    pub sortorder: Rank,
}

impl Ranked for TestChild {
    type Id = String;
    type Partition = String;

    const KIND: &'static str = "test-child";

    fn id(&self) -> &String {
        &self.id
    }

    fn rank(&self) -> Rank {
        self.sortorder
    }

    fn set_rank(&mut self, rank: Rank) {
        self.sortorder = rank;
    }

    fn partition(&self) -> String {
        self.parent.clone()
    }
}

pub fn item(id: &str, sortorder: Rank) -> TestItem {
    TestItem {
        id: id.to_string(),
        label: id.to_uppercase(),
        sortorder,
    }
}

pub fn child(id: &str, parent: &str, sortorder: Rank) -> TestChild {
    TestChild {
        id: id.to_string(),
        parent: parent.to_string(),
        sortorder,
    }
}

/// Fetched collection of `ids` ranked in the given order
pub fn items(ids: &[&str]) -> RankedCollection<TestItem> {
    RankedCollection::from_list(
        ids.iter().zip(1..).map(|(id, rank)| item(id, rank)),
        true,
    )
}

/// `(id, rank)` pairs of a partition in rank order
pub fn ranks_of<T>(collection: &RankedCollection<T>, partition: &T::Partition) -> Vec<(String, Rank)>
where
    T: Ranked,
{
    collection
        .partition(partition)
        .into_iter()
        .map(|member| (member.id().to_string(), member.rank()))
        .collect()
}

/// Expected `(id, rank)` pairs
pub fn pairs(expected: &[(&str, Rank)]) -> Vec<(String, Rank)> {
    expected
        .iter()
        .map(|&(id, rank)| (id.to_string(), rank))
        .collect()
}

/// Panic with the drift report unless every partition is `1..=n`
pub fn assert_dense<T: Ranked>(collection: &RankedCollection<T>) {
    if let Err(err) = collection.verify() {
        panic!("dense rank invariant violated: {err}");
    }
}

/// Operation applied to a collection of [`TestChild`] in property tests
#[derive(Debug, Clone)]
pub enum ChildOp {
    Insert { parent: usize, rank: Rank },
    Update { pick: usize, parent: usize, rank: Rank },
    Remove { pick: usize },
}

/// Parent keys used by [`ChildOp`]
pub const PARENTS: [&str; 3] = ["cat-a", "cat-b", "cat-c"];

pub fn child_op() -> impl Strategy<Value = ChildOp> {
    prop_oneof![
        (0..PARENTS.len(), 0..8u32).prop_map(|(parent, rank)| ChildOp::Insert { parent, rank }),
        (any::<usize>(), 0..PARENTS.len(), 0..8u32)
            .prop_map(|(pick, parent, rank)| ChildOp::Update { pick, parent, rank }),
        any::<usize>().prop_map(|pick| ChildOp::Remove { pick }),
    ]
}

pub fn child_ops(max: usize) -> impl Strategy<Value = Vec<ChildOp>> {
    proptest::collection::vec(child_op(), 0..max)
}

/// Apply one op; `next_id` mints ids for inserts
///
/// Ops picking from an empty collection are skipped.
pub fn apply_child_op(
    collection: &RankedCollection<TestChild>,
    op: &ChildOp,
    next_id: &mut usize,
) -> RankedCollection<TestChild> {
    match *op {
        ChildOp::Insert { parent, rank } => {
            *next_id += 1;
            let entity = child(&format!("n{next_id}"), PARENTS[parent], rank);
            collection
                .insert(entity)
                .unwrap_or_else(|err| panic!("fresh id rejected: {err}"))
        }
        ChildOp::Update { pick, parent, rank } => match pick_member(collection, pick) {
            Some(mut entity) => {
                entity.parent = PARENTS[parent].to_string();
                entity.sortorder = rank;
                collection
                    .update(entity)
                    .unwrap_or_else(|err| panic!("picked id vanished: {err}"))
            }
            None => collection.clone(),
        },
        ChildOp::Remove { pick } => match pick_member(collection, pick) {
            Some(entity) => collection
                .remove(&entity.id)
                .unwrap_or_else(|err| panic!("picked id vanished: {err}")),
            None => collection.clone(),
        },
    }
}

fn pick_member(collection: &RankedCollection<TestChild>, pick: usize) -> Option<TestChild> {
    if collection.is_empty() {
        return None;
    }
    collection.items().get(pick % collection.len()).cloned()
}
