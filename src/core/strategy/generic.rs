use crate::core::strategy::CategoryRankingStrategy;
use crate::core::tags::count_literal_overlap;
use crate::models::{Answers, Candidate};

/// Fallback for categories without a dedicated strategy
///
/// Score is the number of distinct tags literally equal (case-insensitive)
/// to a submitted answer value.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericStrategy;

impl GenericStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl CategoryRankingStrategy for GenericStrategy {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn score(&self, candidate: &Candidate, answers: &Answers) -> u32 {
        count_literal_overlap(&candidate.tags, answers)
    }

    fn has_criteria(&self, answers: &Answers) -> bool {
        answers.values().next().is_some()
    }

    fn matches_criteria(&self, candidate: &Candidate, answers: &Answers) -> bool {
        self.score(candidate, answers) > 0
    }
}
