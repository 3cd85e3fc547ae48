// Core algorithm exports
pub mod engine;
pub mod promotion;
pub mod strategy;
pub mod synonyms;
pub mod tags;

pub use engine::RankingEngine;
pub use promotion::FeaturedPromotionRule;
pub use strategy::{
    CategoryRankingStrategy, GenericStrategy, RealEstateStrategy, RestaurantStrategy, TieredFields,
    TieredStrategy,
};
pub use synonyms::{SynonymCatalog, SynonymError, SynonymTable};
pub use tags::{matches, matches_any};
