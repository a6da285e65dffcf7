//! Catalog entity adapters
//!
//! Each entity implements [`Ranked`](shelf_rank::Ranked); only
//! [`Subcategory`] has a partition (its parent category).

mod category;
mod client_logo;
mod featured_section;
mod hero_section;
mod subcategory;

pub use category::Category;
pub use client_logo::ClientLogo;
pub use featured_section::FeaturedSection;
pub use hero_section::HeroSection;
pub use subcategory::Subcategory;
