//! Product category

use serde::{Deserialize, Serialize};
use shelf_rank::{Rank, Ranked};

/// Top-level product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend id
    pub id: String,
    /// Display name
    pub name: String,
    /// URL slug
    #[serde(default)]
    pub slug: String,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Position in the category list
    pub sortorder: Rank,
}

impl Category {
    /// Create category with an empty slug and no image
    pub fn new(id: impl Into<String>, name: impl Into<String>, sortorder: Rank) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: String::new(),
            image: None,
            sortorder,
        }
    }
}

impl Ranked for Category {
    type Id = String;
    type Partition = ();

    const KIND: &'static str = "category";

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
