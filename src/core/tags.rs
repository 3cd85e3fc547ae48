use std::collections::HashSet;
use crate::core::synonyms::SynonymTable;
use crate::models::Answers;

/// Check whether a tag matches a synonym set
///
/// Matching is bidirectional, case-insensitive substring containment: the tag
/// contains a synonym, or a synonym contains the tag. Blank tags and blank
/// synonyms never match. Short tags can hit unrelated longer synonyms; that
/// behavior is kept as-is.
#[inline]
pub fn matches(tag: &str, synonyms: &[String]) -> bool {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        return false;
    }

    synonyms.iter().any(|synonym| {
        let synonym = synonym.trim().to_lowercase();
        !synonym.is_empty() && (tag.contains(&synonym) || synonym.contains(&tag))
    })
}

/// Check whether any of a candidate's tags matches a synonym set
#[inline]
pub fn matches_any(tags: &[String], synonyms: &[String]) -> bool {
    tags.iter().any(|tag| matches(tag, synonyms))
}

/// Synonym match for a requested value
///
/// Values that are not canonical entries of `table` match literally through
/// the same containment rule.
pub fn matches_value(tags: &[String], table: &SynonymTable, value: &str) -> bool {
    match table.lookup(value) {
        Some(synonyms) => matches_any(tags, synonyms),
        None => matches_any(tags, std::slice::from_ref(&value.to_string())),
    }
}

/// Exact, case-insensitive tag membership
#[inline]
pub fn has_tag(tags: &[String], value: &str) -> bool {
    let value = fold(value);
    !value.is_empty() && tags.iter().any(|tag| fold(tag) == value)
}

/// Number of distinct tags equal to any submitted answer value
///
/// Tags that differ only in case count once.
pub fn count_literal_overlap(tags: &[String], answers: &Answers) -> u32 {
    let submitted: HashSet<String> = answers.values().map(fold).collect();
    let distinct: HashSet<String> = tags.iter().map(|tag| fold(tag)).collect();
    distinct.iter().filter(|tag| submitted.contains(*tag)).count() as u32
}

/// Case folding shared by every exact comparison
#[inline]
pub fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Plain substring containment: some tag contains `value`
#[inline]
pub fn tag_contains(tags: &[String], value: &str) -> bool {
    let value = value.trim().to_lowercase();
    !value.is_empty() && tags.iter().any(|tag| tag.to_lowercase().contains(&value))
}
