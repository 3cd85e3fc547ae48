// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Answers, Candidate, Category, ListingRecord};
pub use requests::RankRequest;
pub use responses::{CategoryInfo, ErrorResponse, HealthResponse, RankResponse};
