use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;
use crate::config::Settings;
use crate::core::RankingEngine;
use crate::models::{Candidate, CategoryInfo, ErrorResponse, HealthResponse, RankRequest, RankResponse};
use crate::services::{RankCache, RankCacheKey};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: RankingEngine,
    pub cache: Option<RankCache>,
    pub settings: Arc<Settings>,
}

/// Configure all ranking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/categories", web::get().to(list_categories))
        .route("/rank", web::post().to(rank_listings));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Categories with a dedicated ranking strategy
///
/// GET /api/v1/categories
async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    let categories: Vec<CategoryInfo> = state
        .engine
        .categories()
        .into_iter()
        .map(|(category, strategy)| CategoryInfo {
            id: category.as_str().to_string(),
            strategy: strategy.to_string(),
        })
        .collect();

    HttpResponse::Ok().json(categories)
}

/// Rank listings endpoint
///
/// POST /api/v1/rank
///
/// Request body:
/// ```json
/// {
///   "category": "restaurants-cafes",
///   "listings": [{"id": "1", "name": "Casa", "tags": ["mexican"], "isFeatured": true}],
///   "answers": {"cuisine": "mexican"},
///   "topN": 3,
///   "snapshotVersion": "2024-05-01T10:00:00Z"
/// }
/// ```
async fn rank_listings(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let RankRequest {
        category,
        listings,
        answers,
        top_n,
        snapshot_version,
    } = req.into_inner();

    let top_n = state.settings.top_matches(top_n);
    let strategy = state.engine.strategy_name(&category);

    tracing::info!(
        "Ranking {} listings for category '{}' ({} strategy, {} answers)",
        listings.len(),
        category,
        strategy,
        answers.len()
    );

    let cache_key = match (&state.cache, &snapshot_version) {
        (Some(_), Some(version)) => Some(RankCacheKey::new(&category, version, &answers)),
        _ => None,
    };

    let cached = match (&state.cache, &cache_key) {
        (Some(cache), Some(key)) => cache.get(key).await,
        _ => None,
    };
    let was_cached = cached.is_some();

    let ranked = match cached {
        Some(ranked) => ranked,
        None => {
            let candidates: Vec<Candidate> = listings.into_iter().map(Candidate::from).collect();
            let ranked = Arc::new(state.engine.rank(&category, candidates, &answers));
            if let (Some(cache), Some(key)) = (&state.cache, cache_key) {
                cache.insert(key, Arc::clone(&ranked)).await;
            }
            ranked
        }
    };

    let split = top_n.min(ranked.len());
    let response = RankResponse {
        request_id: uuid::Uuid::new_v4().to_string(),
        category,
        strategy: strategy.to_string(),
        top_matches: ranked[..split].to_vec(),
        other_providers: ranked[split..].to_vec(),
        total_results: ranked.len(),
        cached: was_cached,
    };

    tracing::info!(
        "Returning {} top matches and {} other providers (cached: {})",
        response.top_matches.len(),
        response.other_providers.len(),
        was_cached
    );

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn state(cache: Option<RankCache>) -> AppState {
        AppState {
            engine: RankingEngine::with_default_tables(),
            cache,
            settings: Arc::new(Settings::default()),
        }
    }

    fn body() -> serde_json::Value {
        serde_json::json!({
            "category": "restaurants-cafes",
            "answers": {"cuisine": "mexican"},
            "topN": 1,
            "listings": [
                {"id": "a", "name": "A", "tags": ["taco"], "rating": 4.5},
                {"id": "b", "name": "B", "categories": ["mexican"], "isSponsored": true, "rating": 3.0},
                {"id": "c", "name": "C", "tags": null}
            ]
        })
    }

    #[actix_web::test]
    async fn test_rank_splits_top_matches() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(None)))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/rank")
            .set_json(body())
            .to_request();
        let resp: RankResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.strategy, "restaurants-cafes");
        assert_eq!(resp.total_results, 3);
        assert_eq!(resp.top_matches.len(), 1);
        assert_eq!(resp.top_matches[0].id, "b");
        let others: Vec<&str> = resp.other_providers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(others, vec!["a", "c"]);
        assert!(!resp.cached);
    }

    #[actix_web::test]
    async fn test_rank_uses_cache_with_snapshot_version() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(Some(RankCache::new(10, 60)))))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let mut payload = body();
        payload["snapshotVersion"] = serde_json::json!("v1");

        let first = test::TestRequest::post().uri("/api/v1/rank").set_json(&payload).to_request();
        let first: RankResponse = test::call_and_read_body_json(&app, first).await;
        let second = test::TestRequest::post().uri("/api/v1/rank").set_json(&payload).to_request();
        let second: RankResponse = test::call_and_read_body_json(&app, second).await;

        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(first.top_matches, second.top_matches);
    }

    #[actix_web::test]
    async fn test_rank_rejects_invalid_top_n() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(None)))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let mut payload = body();
        payload["topN"] = serde_json::json!(0);
        let req = test::TestRequest::post().uri("/api/v1/rank").set_json(&payload).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_health_and_categories() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(None)))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let health: HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(health.status, "healthy");

        let req = test::TestRequest::get().uri("/api/v1/categories").to_request();
        let categories: Vec<CategoryInfo> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(categories.len(), 4);
        assert!(categories.iter().any(|c| c.id == "real-estate"));
    }
}
