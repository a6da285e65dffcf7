//! Catalog store
//!
//! One [`Slice`] per ordered catalog entity, all sharing a
//! [`StoreConfig`]. Actions are routed by the slice they name.

use crate::entities::{Category, ClientLogo, FeaturedSection, HeroSection, Subcategory};
use serde::{Deserialize, Serialize};
use shelf_rank::RankedCollection;
use shelf_store::{Action, DispatchOutcome, Slice, StoreConfig, StoreResult};

/// Action addressed to one catalog slice
///
/// Wire shape: `{"slice": "heroSections", "action": {"type": "clear"}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "slice", content = "action", rename_all = "camelCase")]
pub enum CatalogAction {
    Categories(Action<Category>),
    Subcategories(Action<Subcategory>),
    HeroSections(Action<HeroSection>),
    FeaturedSections(Action<FeaturedSection>),
    ClientLogos(Action<ClientLogo>),
}

impl CatalogAction {
    /// Slice name as used on the wire
    #[must_use]
    pub fn slice(&self) -> &'static str {
        match self {
            Self::Categories(_) => "categories",
            Self::Subcategories(_) => "subcategories",
            Self::HeroSections(_) => "heroSections",
            Self::FeaturedSections(_) => "featuredSections",
            Self::ClientLogos(_) => "clientLogos",
        }
    }
}

/// Client-side mirror of the backend's ordered catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    categories: Slice<Category>,
    subcategories: Slice<Subcategory>,
    hero_sections: Slice<HeroSection>,
    featured_sections: Slice<FeaturedSection>,
    client_logos: Slice<ClientLogo>,
}

impl CatalogStore {
    /// Create store with every slice empty and unfetched
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            categories: Slice::new(config),
            subcategories: Slice::new(config),
            hero_sections: Slice::new(config),
            featured_sections: Slice::new(config),
            client_logos: Slice::new(config),
        }
    }

    /// Route an action to its slice
    ///
    /// Removing a category leaves its subcategories alone; the backend
    /// owns cascades and the next subcategory fetch replaces them.
    ///
    /// # Errors
    /// Propagates the slice's [`StoreError`](shelf_store::StoreError)
    pub fn dispatch(&mut self, action: CatalogAction) -> StoreResult<DispatchOutcome> {
        match action {
            CatalogAction::Categories(a) => self.categories.dispatch(a),
            CatalogAction::Subcategories(a) => self.subcategories.dispatch(a),
            CatalogAction::HeroSections(a) => self.hero_sections.dispatch(a),
            CatalogAction::FeaturedSections(a) => self.featured_sections.dispatch(a),
            CatalogAction::ClientLogos(a) => self.client_logos.dispatch(a),
        }
    }

    /// Empty every slice (logout)
    pub fn clear_all(&mut self) {
        tracing::info!("clearing catalog store");
        self.categories = Slice::new(*self.categories.config());
        self.subcategories = Slice::new(*self.subcategories.config());
        self.hero_sections = Slice::new(*self.hero_sections.config());
        self.featured_sections = Slice::new(*self.featured_sections.config());
        self.client_logos = Slice::new(*self.client_logos.config());
    }

    pub fn categories(&self) -> &RankedCollection<Category> {
        self.categories.state()
    }

    pub fn subcategories(&self) -> &RankedCollection<Subcategory> {
        self.subcategories.state()
    }

    pub fn hero_sections(&self) -> &RankedCollection<HeroSection> {
        self.hero_sections.state()
    }

    pub fn featured_sections(&self) -> &RankedCollection<FeaturedSection> {
        self.featured_sections.state()
    }

    pub fn client_logos(&self) -> &RankedCollection<ClientLogo> {
        self.client_logos.state()
    }

    /// Mutable access to the subcategory slice (checkpoints, rollback)
    pub fn subcategories_slice(&mut self) -> &mut Slice<Subcategory> {
        &mut self.subcategories
    }

    /// Mutable access to the category slice (checkpoints, rollback)
    pub fn categories_slice(&mut self) -> &mut Slice<Category> {
        &mut self.categories
    }

    /// Rank-ordered, serializable copy of every slice
    #[must_use]
    pub fn view(&self) -> CatalogView {
        CatalogView {
            categories: SliceView::of(self.categories()),
            subcategories: SliceView::of(self.subcategories()),
            hero_sections: SliceView::of(self.hero_sections()),
            featured_sections: SliceView::of(self.featured_sections()),
            client_logos: SliceView::of(self.client_logos()),
        }
    }
}

/// Serializable view of one slice
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceView<T> {
    pub fetched: bool,
    pub items: Vec<T>,
}

impl<T: shelf_rank::Ranked> SliceView<T> {
    fn of(collection: &RankedCollection<T>) -> Self {
        Self {
            fetched: collection.is_fetched(),
            items: collection.ranked().into_iter().cloned().collect(),
        }
    }
}

/// Serializable view of the whole store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub categories: SliceView<Category>,
    pub subcategories: SliceView<Subcategory>,
    pub hero_sections: SliceView<HeroSection>,
    pub featured_sections: SliceView<FeaturedSection>,
    pub client_logos: SliceView<ClientLogo>,
}
