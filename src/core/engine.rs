use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use crate::core::promotion::FeaturedPromotionRule;
use crate::core::strategy::{
    CategoryRankingStrategy, GenericStrategy, RealEstateStrategy, RestaurantStrategy, TieredStrategy,
};
use crate::core::synonyms::SynonymCatalog;
use crate::models::{Answers, Candidate, Category};

/// Candidate with its transient ranking keys
#[derive(Debug)]
pub(crate) struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: u32,
    pub boosted: bool,
}

/// Main ranking orchestrator
///
/// # Pipeline Stages
/// 1. Strategy lookup by category (generic fallback)
/// 2. Exclusion filter
/// 3. Scoring
/// 4. Ordering: promotion, score, rating, name
///
/// The engine only holds immutable strategies, so one instance can be cloned
/// into every worker and called concurrently.
#[derive(Clone)]
pub struct RankingEngine {
    strategies: HashMap<Category, Arc<dyn CategoryRankingStrategy>>,
    fallback: Arc<dyn CategoryRankingStrategy>,
}

impl RankingEngine {
    pub fn new(catalog: &SynonymCatalog) -> Self {
        let mut strategies: HashMap<Category, Arc<dyn CategoryRankingStrategy>> = HashMap::new();
        strategies.insert(Category::HealthWellness, Arc::new(TieredStrategy::health_wellness(catalog)));
        strategies.insert(Category::HomeServices, Arc::new(TieredStrategy::home_services(catalog)));
        strategies.insert(Category::RealEstate, Arc::new(RealEstateStrategy::new()));
        strategies.insert(Category::RestaurantsCafes, Arc::new(RestaurantStrategy::from_catalog(catalog)));

        Self {
            strategies,
            fallback: Arc::new(GenericStrategy::new()),
        }
    }

    pub fn with_default_tables() -> Self {
        Self::new(&SynonymCatalog::with_defaults())
    }

    /// Register or replace the strategy of a category
    pub fn with_strategy(mut self, category: Category, strategy: Arc<dyn CategoryRankingStrategy>) -> Self {
        self.strategies.insert(category, strategy);
        self
    }

    /// Strategy for a category id; unknown ids get the generic strategy
    pub fn strategy_for(&self, category: &str) -> &dyn CategoryRankingStrategy {
        Category::parse(category)
            .and_then(|c| self.strategies.get(&c))
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    pub fn strategy_name(&self, category: &str) -> &'static str {
        self.strategy_for(category).name()
    }

    /// Categories with a dedicated strategy, in a stable order
    pub fn categories(&self) -> Vec<(Category, &'static str)> {
        let mut categories: Vec<_> = self
            .strategies
            .iter()
            .map(|(category, strategy)| (*category, strategy.name()))
            .collect();
        categories.sort();
        categories
    }

    /// Rank a candidate snapshot for a category and a set of answers
    ///
    /// Only the strategy's exclusion rule removes candidates; a zero score is
    /// still ranked. The output order is fully determined by the inputs.
    pub fn rank(&self, category: &str, candidates: Vec<Candidate>, answers: &Answers) -> Vec<Candidate> {
        let strategy = self.strategy_for(category);
        let promotion = FeaturedPromotionRule::new(strategy, answers);
        let total_candidates = candidates.len();

        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|candidate| !strategy.exclude(candidate, answers))
            .map(|candidate| ScoredCandidate {
                score: strategy.score(&candidate, answers),
                boosted: promotion.is_boost_eligible(&candidate),
                candidate,
            })
            .collect();

        scored.sort_by(compare_scored);

        tracing::debug!(
            "Ranked {} of {} candidates for '{}' with {} strategy (criteria: {})",
            scored.len(),
            total_candidates,
            category,
            strategy.name(),
            promotion.criteria_present()
        );

        scored.into_iter().map(|s| s.candidate).collect()
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::with_default_tables()
    }
}

/// Composite comparator; a total order over distinct candidates
pub(crate) fn compare_scored(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.boosted
        .cmp(&a.boosted)
        .then_with(|| b.score.cmp(&a.score))
        .then_with(|| b.candidate.sort_rating().total_cmp(&a.candidate.sort_rating()))
        .then_with(|| compare_names(&a.candidate.name, &b.candidate.name))
        .then_with(|| a.candidate.name.cmp(&b.candidate.name))
        .then_with(|| a.candidate.id.cmp(&b.candidate.id))
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
