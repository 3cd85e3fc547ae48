//! Category ranking strategies
//!
//! Each category scores candidates with its own field weights. The engine
//! selects one implementation per request through [`crate::core::RankingEngine`].

pub mod generic;
pub mod real_estate;
pub mod restaurant;
pub mod tiered;

use crate::models::{Answers, Candidate};

pub use generic::GenericStrategy;
pub use real_estate::RealEstateStrategy;
pub use restaurant::RestaurantStrategy;
pub use tiered::{TieredFields, TieredStrategy};

/// Scoring and exclusion rules for one directory category
///
/// Implementations are pure and must be thread-safe (`Send` + `Sync`): the
/// same instance serves every concurrent `rank` call.
pub trait CategoryRankingStrategy: Send + Sync {
    /// Strategy name for logging and introspection
    fn name(&self) -> &'static str;

    /// Whether `candidate` is removed from the pool before scoring
    fn exclude(&self, _candidate: &Candidate, _answers: &Answers) -> bool {
        false
    }

    /// Relevance score; zero is a valid outcome
    fn score(&self, candidate: &Candidate, answers: &Answers) -> u32;

    /// Whether the answers supply a primary or secondary criterion
    fn has_criteria(&self, answers: &Answers) -> bool;

    /// Whether `candidate` satisfies at least one primary or secondary criterion
    fn matches_criteria(&self, candidate: &Candidate, answers: &Answers) -> bool;
}
