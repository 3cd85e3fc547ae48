//! Provider Match - category-aware ranking for the local business directory
//!
//! This library provides the ranking engine behind the directory's provider
//! search: category strategies, synonym tables and the featured-listing
//! tie-break policy, plus the HTTP service that exposes them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CategoryRankingStrategy, FeaturedPromotionRule, RankingEngine, SynonymCatalog, SynonymTable};
pub use models::{Answers, Candidate, Category, ListingRecord, RankRequest, RankResponse};
