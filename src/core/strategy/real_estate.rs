use crate::core::strategy::CategoryRankingStrategy;
use crate::core::tags::has_tag;
use crate::models::{Answers, Candidate};

/// (field, weight) pairs scored on exact tag membership
const WEIGHTED_FIELDS: [(&str, u32); 6] = [
    ("need", 2),
    ("property_type", 2),
    ("timeline", 1),
    ("move_timing", 1),
    ("budget", 1),
    ("bedrooms", 1),
];

const CRITERIA_FIELDS: [&str; 2] = ["need", "property_type"];
const STAGING_FIELD: &str = "staging";
const STAGING_WEIGHT: u32 = 1;
const STAGING_MARKERS: [&str; 2] = ["stager", "staging"];

/// Agents, brokers, lenders and stagers
///
/// No synonym expansion: every field matches by exact tag membership.
/// Staging providers only appear when the user asked for staging.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealEstateStrategy;

impl RealEstateStrategy {
    pub fn new() -> Self {
        Self
    }

    fn staging_requested(answers: &Answers) -> bool {
        answers
            .values_for(STAGING_FIELD)
            .any(|value| value.eq_ignore_ascii_case("yes"))
    }

    fn offers_staging(candidate: &Candidate) -> bool {
        candidate.tags.iter().any(|tag| {
            let tag = tag.to_lowercase();
            STAGING_MARKERS.iter().any(|marker| tag.contains(marker))
        })
    }
}

impl CategoryRankingStrategy for RealEstateStrategy {
    fn name(&self) -> &'static str {
        "real-estate"
    }

    fn exclude(&self, candidate: &Candidate, answers: &Answers) -> bool {
        Self::offers_staging(candidate) && !Self::staging_requested(answers)
    }

    fn score(&self, candidate: &Candidate, answers: &Answers) -> u32 {
        let tags = &candidate.tags;
        let mut score = 0;

        for (field, weight) in WEIGHTED_FIELDS {
            for value in answers.values_for(field) {
                if has_tag(tags, value) {
                    score += weight;
                }
            }
        }

        if Self::staging_requested(answers) && Self::offers_staging(candidate) {
            score += STAGING_WEIGHT;
        }

        score
    }

    fn has_criteria(&self, answers: &Answers) -> bool {
        CRITERIA_FIELDS.iter().any(|field| answers.has(field))
    }

    fn matches_criteria(&self, candidate: &Candidate, answers: &Answers) -> bool {
        CRITERIA_FIELDS.iter().any(|field| {
            answers
                .values_for(field)
                .any(|value| has_tag(&candidate.tags, value))
        })
    }
}
