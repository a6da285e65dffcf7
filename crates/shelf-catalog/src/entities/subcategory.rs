//! Subcategory, ranked within its parent category

use serde::{Deserialize, Serialize};
use shelf_rank::{Rank, Ranked};

/// Subcategory; `sortorder` is dense per `category_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    /// Backend id
    pub id: String,
    /// Display name
    pub name: String,
    /// URL slug
    #[serde(default)]
    pub slug: String,
    /// Parent category id (the partition key)
    pub category_id: String,
    /// Position among siblings of the same category
    pub sortorder: Rank,
}

impl Subcategory {
    /// Create subcategory under `category_id`
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_id: impl Into<String>,
        sortorder: Rank,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: String::new(),
            category_id: category_id.into(),
            sortorder,
        }
    }
}

impl Ranked for Subcategory {
    type Id = String;
    type Partition = String;

    const KIND: &'static str = "subcategory";

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
        self.category_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_is_parent_category() {
        let json = r#"{"id":"s1","name":"Boots","categoryId":"c1","sortorder":1}"#;
        let sub: Subcategory = serde_json::from_str(json).unwrap();

        assert_eq!(sub.partition(), "c1");
        assert_eq!(sub.slug, "");
    }
}
