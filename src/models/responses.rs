use serde::{Deserialize, Serialize};
use crate::models::domain::Candidate;

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub category: String,
    pub strategy: String,
    #[serde(rename = "topMatches")]
    pub top_matches: Vec<Candidate>,
    #[serde(rename = "otherProviders")]
    pub other_providers: Vec<Candidate>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    pub cached: bool,
}

/// One entry of the categories listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub strategy: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
