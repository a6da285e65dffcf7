//! Homepage hero carousel slide

use serde::{Deserialize, Serialize};
use shelf_rank::{Rank, Ranked};

/// Hero carousel slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub sort_order: Rank,
}

impl HeroSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>, sort_order: Rank) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: String::new(),
            image: None,
            link: None,
            sort_order,
        }
    }
}

impl Ranked for HeroSection {
    type Id = String;
    type Partition = ();

    const KIND: &'static str = "hero section";

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_stays_off_the_wire() {
        let json = r#"{"id":"h1","title":"Spring","sortOrder":1}"#;
        let hero: HeroSection = serde_json::from_str(json).unwrap();

        assert_eq!(hero.image, None);
        assert!(!serde_json::to_string(&hero).unwrap().contains("image"));
    }
}
