//! Curated homepage product row

use serde::{Deserialize, Serialize};
use shelf_rank::{Rank, Ranked};

/// Featured product section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedSection {
    pub id: String,
    pub title: String,
    /// Products shown in this row, in display order
    #[serde(default)]
    pub product_ids: Vec<String>,
    pub sort_order: Rank,
}

impl FeaturedSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>, sort_order: Rank) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            product_ids: Vec::new(),
            sort_order,
        }
    }
}

impl Ranked for FeaturedSection {
    type Id = String;
    type Partition = ();

    const KIND: &'static str = "featured section";

    fn id(&self) -> &String {
        &self.id
    }

    fn rank(&self) -> Rank {
        self.sort_order
    }

    fn set_rank(&mut self, rank: Rank) {
        self.sort_order = rank;
    }

    fn partition(&self) {}
}
