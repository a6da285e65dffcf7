//! Client logo strip entry

use serde::{Deserialize, Serialize};
use shelf_rank::{Rank, Ranked};

/// Client logo; the list is sorted by rank when loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientLogo {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub sort_order: Rank,
}

impl ClientLogo {
    pub fn new(id: impl Into<String>, name: impl Into<String>, sort_order: Rank) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
            sort_order,
        }
    }
}

impl Ranked for ClientLogo {
    type Id = String;
    type Partition = ();

    const KIND: &'static str = "client logo";
    const SORT_ON_LOAD: bool = true;

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
