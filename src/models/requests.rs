use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Answers, ListingRecord};

/// Request to rank a listing snapshot
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(length(max = 64))]
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub listings: Vec<ListingRecord>,
    #[serde(default)]
    pub answers: Answers,
    #[validate(range(min = 1, max = 100))]
    #[serde(alias = "top_n", rename = "topN")]
    pub top_n: Option<u16>,
    #[validate(length(min = 1, max = 128))]
    #[serde(alias = "snapshot_version", rename = "snapshotVersion")]
    pub snapshot_version: Option<String>,
}
