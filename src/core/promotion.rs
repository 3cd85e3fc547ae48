use crate::core::strategy::CategoryRankingStrategy;
use crate::models::{Answers, Candidate};

/// Decides which featured listings are lifted above the rest
///
/// A featured candidate is boost-eligible when the user applied no criteria,
/// or when it satisfies at least one primary/secondary criterion of the
/// active strategy. A featured listing that matches nothing the user asked
/// for is ranked like any other listing.
pub struct FeaturedPromotionRule<'a> {
    strategy: &'a dyn CategoryRankingStrategy,
    answers: &'a Answers,
    criteria_present: bool,
}

impl<'a> FeaturedPromotionRule<'a> {
    pub fn new(strategy: &'a dyn CategoryRankingStrategy, answers: &'a Answers) -> Self {
        Self {
            strategy,
            answers,
            criteria_present: strategy.has_criteria(answers),
        }
    }

    pub fn criteria_present(&self) -> bool {
        self.criteria_present
    }

    pub fn is_boost_eligible(&self, candidate: &Candidate) -> bool {
        candidate.featured
            && (!self.criteria_present || self.strategy.matches_criteria(candidate, self.answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::strategy::RealEstateStrategy;

    #[test]
    fn test_featured_promoted_without_criteria() {
        let strategy = RealEstateStrategy::new();
        let answers = Answers::new().with("budget", "under-500k");
        let rule = FeaturedPromotionRule::new(&strategy, &answers);

        assert!(!rule.criteria_present());
        assert!(rule.is_boost_eligible(&Candidate::new("f", "F").featured()));
        assert!(!rule.is_boost_eligible(&Candidate::new("n", "N")));
    }

    #[test]
    fn test_featured_needs_match_when_criteria_present() {
        let strategy = RealEstateStrategy::new();
        let answers = Answers::new().with("need", "buy");
        let rule = FeaturedPromotionRule::new(&strategy, &answers);

        let relevant = Candidate::new("r", "R").with_tags(["buy"]).featured();
        let irrelevant = Candidate::new("i", "I").with_tags(["rent"]).featured();
        let plain = Candidate::new("p", "P").with_tags(["buy"]);

        assert!(rule.is_boost_eligible(&relevant));
        assert!(!rule.is_boost_eligible(&irrelevant));
        assert!(!rule.is_boost_eligible(&plain));
    }
}
