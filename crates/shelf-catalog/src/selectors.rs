//! Derived views for forms and tables

use crate::entities::{Category, ClientLogo, FeaturedSection, HeroSection, Subcategory};
use crate::store::CatalogStore;
use serde::Serialize;
use shelf_rank::{Rank, Ranked, RankedCollection};

/// Entity with a human-readable label for dropdowns
pub trait Labelled {
    /// Label shown in a select option
    fn label(&self) -> &str;
}

impl Labelled for Category {
    fn label(&self) -> &str {
        &self.name
    }
}

impl Labelled for Subcategory {
    fn label(&self) -> &str {
        &self.name
    }
}

impl Labelled for HeroSection {
    fn label(&self) -> &str {
        &self.title
    }
}

impl Labelled for FeaturedSection {
    fn label(&self) -> &str {
        &self.title
    }
}

impl Labelled for ClientLogo {
    fn label(&self) -> &str {
        &self.name
    }
}

/// One `<option>` of a select dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub rank: Rank,
}

/// Sort order a newly created entity gets by default (`|P| + 1`)
#[must_use]
pub fn next_sort_order<T: Ranked>(collection: &RankedCollection<T>, partition: &T::Partition) -> Rank {
    collection.next_rank(partition)
}

/// Dropdown options for one partition, in rank order
#[must_use]
pub fn select_options<T>(collection: &RankedCollection<T>, partition: &T::Partition) -> Vec<SelectOption>
where
    T: Ranked + Labelled,
{
    collection
        .partition(partition)
        .into_iter()
        .map(|entity| SelectOption {
            value: entity.id().to_string(),
            label: entity.label().to_string(),
            rank: entity.rank(),
        })
        .collect()
}

/// Sort-order choices for an edit form: `1..=|P|`, plus `|P| + 1` when creating
#[must_use]
pub fn sort_order_choices<T: Ranked>(
    collection: &RankedCollection<T>,
    partition: &T::Partition,
    creating: bool,
) -> Vec<Rank> {
    let last = if creating {
        collection.next_rank(partition)
    } else {
        collection.next_rank(partition).saturating_sub(1)
    };
    (1..=last).collect()
}

/// Subcategories of one category, in rank order
#[must_use]
pub fn subcategories_of<'a>(store: &'a CatalogStore, category_id: &str) -> Vec<&'a Subcategory> {
    store.subcategories().partition(&category_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_store::{Action, StoreConfig};

    fn store() -> CatalogStore {
        let mut store = CatalogStore::new(StoreConfig::new());
        store
            .dispatch(crate::CatalogAction::Subcategories(Action::loaded(vec![
                Subcategory::new("s2", "Sandals", "c1", 2),
                Subcategory::new("s1", "Boots", "c1", 1),
                Subcategory::new("s3", "Totes", "c2", 1),
            ])))
            .unwrap();
        store
    }

    #[test]
    fn next_sort_order_per_partition() {
        let store = store();
        let subs = store.subcategories();

        assert_eq!(next_sort_order(subs, &"c1".to_string()), 3);
        assert_eq!(next_sort_order(subs, &"c2".to_string()), 2);
        assert_eq!(next_sort_order(subs, &"c9".to_string()), 1);
    }

    #[test]
    fn select_options_in_rank_order() {
        let store = store();
        let options = select_options(store.subcategories(), &"c1".to_string());

        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Boots", "Sandals"]);
        assert_eq!(options[0].value, "s1");
    }

    #[test]
    fn sort_order_choices_for_create_and_edit() {
        let store = store();
        let subs = store.subcategories();

        assert_eq!(sort_order_choices(subs, &"c1".to_string(), true), vec![1, 2, 3]);
        assert_eq!(sort_order_choices(subs, &"c1".to_string(), false), vec![1, 2]);
        assert!(sort_order_choices(subs, &"c9".to_string(), false).is_empty());
    }

    #[test]
    fn subcategories_of_filters_parent() {
        let store = store();
        let ids: Vec<_> = subcategories_of(&store, "c1")
            .iter()
            .map(|s| s.id.as_str())
            .collect();

        assert_eq!(ids, vec!["s1", "s2"]);
    }
}
