use std::sync::Arc;
use crate::core::strategy::CategoryRankingStrategy;
use crate::core::synonyms::{SynonymCatalog, SynonymTable};
use crate::core::tags::{count_literal_overlap, has_tag, matches_value};
use crate::models::{Answers, Candidate, Category};

const CUISINE_FIELD: &str = "cuisine";
const CUISINE_EXACT_WEIGHT: u32 = 4;
const CUISINE_SYNONYM_WEIGHT: u32 = 3;
const FLAT_FIELDS: [&str; 3] = ["occasion", "price", "service_style"];
const FLAT_WEIGHT: u32 = 2;
const OVERLAP_WEIGHT: u32 = 1;

/// Restaurants and cafes
///
/// Cuisine is scored in two tiers (exact tag, then synonym). Occasion, price
/// tier and service style score on exact tags. Every candidate tag that
/// equals any submitted answer value adds an overlap point on top.
#[derive(Debug, Clone)]
pub struct RestaurantStrategy {
    cuisine_table: Arc<SynonymTable>,
}

impl RestaurantStrategy {
    pub fn new(cuisine_table: Arc<SynonymTable>) -> Self {
        Self { cuisine_table }
    }

    pub fn from_catalog(catalog: &SynonymCatalog) -> Self {
        Self::new(catalog.table(Category::RestaurantsCafes.as_str(), CUISINE_FIELD))
    }

    fn cuisine_score(&self, tags: &[String], cuisine: &str) -> u32 {
        if has_tag(tags, cuisine) {
            CUISINE_EXACT_WEIGHT
        } else if matches_value(tags, &self.cuisine_table, cuisine) {
            CUISINE_SYNONYM_WEIGHT
        } else {
            0
        }
    }
}

impl CategoryRankingStrategy for RestaurantStrategy {
    fn name(&self) -> &'static str {
        "restaurants-cafes"
    }

    fn score(&self, candidate: &Candidate, answers: &Answers) -> u32 {
        let tags = &candidate.tags;
        let mut score = 0;

        for cuisine in answers.values_for(CUISINE_FIELD) {
            score += self.cuisine_score(tags, cuisine);
        }

        for field in FLAT_FIELDS {
            for value in answers.values_for(field) {
                if has_tag(tags, value) {
                    score += FLAT_WEIGHT;
                }
            }
        }

        score + count_literal_overlap(tags, answers) * OVERLAP_WEIGHT
    }

    fn has_criteria(&self, answers: &Answers) -> bool {
        answers.has(CUISINE_FIELD) || answers.has(FLAT_FIELDS[0])
    }

    fn matches_criteria(&self, candidate: &Candidate, answers: &Answers) -> bool {
        let tags = &candidate.tags;
        answers
            .values_for(CUISINE_FIELD)
            .any(|cuisine| self.cuisine_score(tags, cuisine) > 0)
            || answers
                .values_for(FLAT_FIELDS[0])
                .any(|occasion| has_tag(tags, occasion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> RestaurantStrategy {
        RestaurantStrategy::from_catalog(&SynonymCatalog::with_defaults())
    }

    #[test]
    fn test_exact_cuisine_beats_synonym() {
        let strategy = strategy();
        let answers = Answers::new().with("cuisine", "mexican");

        let exact = Candidate::new("b", "B").with_tags(["Mexican"]);
        let synonym = Candidate::new("a", "A").with_tags(["taco"]);

        // exact tier plus one overlap point for the "mexican" tag
        assert_eq!(strategy.score(&exact, &answers), 4 + 1);
        assert_eq!(strategy.score(&synonym, &answers), 3);
    }

    #[test]
    fn test_flat_fields_and_overlap() {
        let strategy = strategy();
        let answers = Answers::new()
            .with("occasion", "date night")
            .with("price", "$$")
            .with("service_style", "dine-in")
            .with("extra", "patio");
        let candidate = Candidate::new("c", "C").with_tags(["Date Night", "$$", "takeout", "patio"]);

        // occasion 2 + price 2, then overlap for date night, $$, patio
        assert_eq!(strategy.score(&candidate, &answers), 2 + 2 + 3);
    }

    #[test]
    fn test_exact_tiers_fold_accented_case() {
        let strategy = strategy();
        let answers = Answers::new()
            .with("cuisine", "crêperie")
            .with("occasion", "déjeuner");

        let lower = Candidate::new("l", "L").with_tags(["crêperie"]);
        let upper = Candidate::new("u", "U").with_tags(["CRÊPERIE"]);
        assert_eq!(strategy.score(&lower, &answers), 4 + 1);
        assert_eq!(strategy.score(&upper, &answers), 4 + 1);

        let occasion = Candidate::new("o", "O").with_tags(["DÉJEUNER"]);
        assert_eq!(strategy.score(&occasion, &answers), 2 + 1);
        assert!(strategy.matches_criteria(&occasion, &answers));
    }

    #[test]
    fn test_duplicate_tags_overlap_once() {
        let strategy = strategy();
        let answers = Answers::new().with("price", "$$");
        let candidate = Candidate::new("d", "D").with_tags(["$$", "$$"]);

        assert_eq!(strategy.score(&candidate, &answers), 2 + 1);
    }

    #[test]
    fn test_flat_fields_have_no_synonyms() {
        let strategy = strategy();
        let answers = Answers::new().with("occasion", "date");
        let candidate = Candidate::new("c", "C").with_tags(["date night"]);

        assert_eq!(strategy.score(&candidate, &answers), 0);
    }

    #[test]
    fn test_unknown_cuisine_matches_literally() {
        let strategy = strategy();
        let answers = Answers::new().with("cuisine", "korean");
        let candidate = Candidate::new("k", "K").with_tags(["korean bbq"]);

        assert_eq!(strategy.score(&candidate, &answers), 3);
        assert!(strategy.matches_criteria(&candidate, &answers));
    }

    #[test]
    fn test_criteria_fields() {
        let strategy = strategy();
        assert!(strategy.has_criteria(&Answers::new().with("occasion", "brunch")));
        assert!(!strategy.has_criteria(&Answers::new().with("price", "$")));
        assert!(!strategy.has_criteria(&Answers::new()));
    }
}
