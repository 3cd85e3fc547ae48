use std::sync::Arc;
use crate::core::strategy::CategoryRankingStrategy;
use crate::core::synonyms::{SynonymCatalog, SynonymTable};
use crate::core::tags::{matches_value, tag_contains};
use crate::models::{Answers, Candidate, Category};

const PRIMARY_WEIGHT: u32 = 5;
const SECONDARY_WEIGHT: u32 = 3;
const TERTIARY_WEIGHT: u32 = 1;
const UNFILTERED_SCORE: u32 = 1;

/// Question ids consumed by a tiered strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieredFields {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: [&'static str; 2],
}

impl TieredFields {
    pub const HEALTH_WELLNESS: TieredFields = TieredFields {
        primary: "type",
        secondary: "goal",
        tertiary: ["specialty", "keyword"],
    };

    pub const HOME_SERVICES: TieredFields = TieredFields {
        primary: "service",
        secondary: "project",
        tertiary: ["specialty", "keyword"],
    };
}

/// Primary/secondary synonym fields plus two plain keyword fields
///
/// Scoring:
/// - primary synonym match: 5 per answer entry
/// - secondary synonym match: 3 per answer entry
/// - tertiary substring hit: 1 per answer entry
///
/// When none of the fields carries a value every candidate scores 1, so the
/// unfiltered listing still renders.
#[derive(Debug, Clone)]
pub struct TieredStrategy {
    name: &'static str,
    fields: TieredFields,
    primary_table: Arc<SynonymTable>,
    secondary_table: Arc<SynonymTable>,
}

impl TieredStrategy {
    pub fn new(
        name: &'static str,
        fields: TieredFields,
        primary_table: Arc<SynonymTable>,
        secondary_table: Arc<SynonymTable>,
    ) -> Self {
        Self {
            name,
            fields,
            primary_table,
            secondary_table,
        }
    }

    pub fn health_wellness(catalog: &SynonymCatalog) -> Self {
        let fields = TieredFields::HEALTH_WELLNESS;
        Self::new(
            "health-wellness",
            fields,
            catalog.table(Category::HealthWellness.as_str(), fields.primary),
            catalog.table(Category::HealthWellness.as_str(), fields.secondary),
        )
    }

    pub fn home_services(catalog: &SynonymCatalog) -> Self {
        let fields = TieredFields::HOME_SERVICES;
        Self::new(
            "home-services",
            fields,
            catalog.table(Category::HomeServices.as_str(), fields.primary),
            catalog.table(Category::HomeServices.as_str(), fields.secondary),
        )
    }

    fn has_any_answer(&self, answers: &Answers) -> bool {
        self.has_criteria(answers)
            || self.fields.tertiary.iter().any(|field| answers.has(field))
    }
}

impl CategoryRankingStrategy for TieredStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn score(&self, candidate: &Candidate, answers: &Answers) -> u32 {
        if !self.has_any_answer(answers) {
            return UNFILTERED_SCORE;
        }

        let tags = &candidate.tags;
        let mut score = 0;

        for value in answers.values_for(self.fields.primary) {
            if matches_value(tags, &self.primary_table, value) {
                score += PRIMARY_WEIGHT;
            }
        }

        for value in answers.values_for(self.fields.secondary) {
            if matches_value(tags, &self.secondary_table, value) {
                score += SECONDARY_WEIGHT;
            }
        }

        for field in self.fields.tertiary {
            for value in answers.values_for(field) {
                if tag_contains(tags, value) {
                    score += TERTIARY_WEIGHT;
                }
            }
        }

        score
    }

    fn has_criteria(&self, answers: &Answers) -> bool {
        answers.has(self.fields.primary) || answers.has(self.fields.secondary)
    }

    fn matches_criteria(&self, candidate: &Candidate, answers: &Answers) -> bool {
        let tags = &candidate.tags;
        answers
            .values_for(self.fields.primary)
            .any(|value| matches_value(tags, &self.primary_table, value))
            || answers
                .values_for(self.fields.secondary)
                .any(|value| matches_value(tags, &self.secondary_table, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health() -> TieredStrategy {
        TieredStrategy::health_wellness(&SynonymCatalog::with_defaults())
    }

    fn home() -> TieredStrategy {
        TieredStrategy::home_services(&SynonymCatalog::with_defaults())
    }

    #[test]
    fn test_unfiltered_base_score() {
        let strategy = health();
        let answers = Answers::new().with("unrelated", "value");

        assert_eq!(strategy.score(&Candidate::new("1", "Empty"), &answers), 1);
        assert_eq!(
            strategy.score(&Candidate::new("2", "Tagged").with_tags(["yoga"]), &Answers::new()),
            1
        );
    }

    #[test]
    fn test_weights_add_up() {
        let strategy = health();
        let candidate = Candidate::new("1", "Align Chiro").with_tags(["Chiropractor", "back pain clinic", "sports"]);
        let answers = Answers::new()
            .with("type", "chiropractic")
            .with("goal", "pain-relief")
            .with("specialty", "sport")
            .with("keyword", "clinic");

        assert_eq!(strategy.score(&candidate, &answers), 5 + 3 + 1 + 1);
    }

    #[test]
    fn test_multi_select_entries_score_separately() {
        let strategy = health();
        let candidate = Candidate::new("1", "Calm Studio").with_tags(["yoga studio", "meditation", "mobility"]);
        let answers = Answers::new()
            .with("goal", "stress-relief")
            .with("goal.2", "flexibility");

        // stress-relief has no variant in these tags, flexibility matches "mobility"
        assert_eq!(strategy.score(&candidate, &answers), 3);
    }

    #[test]
    fn test_tertiary_fields_use_plain_containment() {
        let strategy = health();
        let candidate = Candidate::new("1", "Spa").with_tags(["day spa"]);
        // "chiropractor" is a synonym but tertiary fields never expand
        let answers = Answers::new().with("keyword", "chiropractic");

        assert_eq!(strategy.score(&candidate, &answers), 0);
        assert!(!strategy.has_criteria(&answers));
    }

    #[test]
    fn test_empty_tags_score_zero_when_filtered() {
        let strategy = home();
        let answers = Answers::new().with("service", "plumbing");

        assert_eq!(strategy.score(&Candidate::new("1", "Bare"), &answers), 0);
    }

    #[test]
    fn test_home_services_uses_own_tables() {
        let strategy = home();
        let candidate = Candidate::new("1", "Drain Pros").with_tags(["Plumber", "24/7"]);
        let answers = Answers::new()
            .with("service", "plumbing")
            .with("project", "emergency");

        assert_eq!(strategy.score(&candidate, &answers), 8);
        assert!(strategy.matches_criteria(&candidate, &answers));
    }

    #[test]
    fn test_matches_criteria_ignores_tertiary() {
        let strategy = home();
        let candidate = Candidate::new("1", "Paint Co").with_tags(["painter"]);
        let answers = Answers::new()
            .with("service", "roofing")
            .with("keyword", "painter");

        assert!(strategy.has_criteria(&answers));
        assert!(!strategy.matches_criteria(&candidate, &answers));
        assert_eq!(strategy.score(&candidate, &answers), 1);
    }
}
