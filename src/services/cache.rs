use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use crate::models::{Answers, Candidate};

/// Cache key for a ranked result
///
/// A result is only reusable for the same category, the same listing
/// snapshot and the same answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankCacheKey {
    pub category: String,
    pub snapshot_version: String,
    pub answers: Answers,
}

impl RankCacheKey {
    pub fn new(category: &str, snapshot_version: &str, answers: &Answers) -> Self {
        Self {
            category: category.trim().to_lowercase(),
            snapshot_version: snapshot_version.to_string(),
            answers: answers.clone(),
        }
    }
}

/// In-memory cache of ranked results
///
/// Callers opt in per request by supplying a snapshot version; entries expire
/// after the configured TTL.
#[derive(Clone)]
pub struct RankCache {
    inner: Cache<RankCacheKey, Arc<Vec<Candidate>>>,
}

impl RankCache {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner }
    }

    pub async fn get(&self, key: &RankCacheKey) -> Option<Arc<Vec<Candidate>>> {
        let hit = self.inner.get(key).await;
        tracing::trace!(
            "Rank cache {} for {}@{}",
            if hit.is_some() { "hit" } else { "miss" },
            key.category,
            key.snapshot_version
        );
        hit
    }

    pub async fn insert(&self, key: RankCacheKey, ranked: Arc<Vec<Candidate>>) {
        tracing::trace!("Rank cache set for {}@{}", key.category, key.snapshot_version);
        self.inner.insert(key, ranked).await;
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.inner.entry_count(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked() -> Arc<Vec<Candidate>> {
        Arc::new(vec![Candidate::new("1", "One")])
    }

    #[tokio::test]
    async fn test_cache_set_get() {
        let cache = RankCache::new(100, 60);
        let answers = Answers::new().with("cuisine", "mexican");
        let key = RankCacheKey::new("restaurants-cafes", "v1", &answers);

        assert!(cache.get(&key).await.is_none());
        cache.insert(key.clone(), ranked()).await;

        let hit = cache.get(&key).await.unwrap();
        assert_eq!(hit[0].id, "1");
    }

    #[tokio::test]
    async fn test_key_includes_snapshot_and_answers() {
        let cache = RankCache::new(100, 60);
        let answers = Answers::new().with("cuisine", "mexican");
        cache
            .insert(RankCacheKey::new("restaurants-cafes", "v1", &answers), ranked())
            .await;

        let newer_snapshot = RankCacheKey::new("restaurants-cafes", "v2", &answers);
        let other_answers = RankCacheKey::new(
            "restaurants-cafes",
            "v1",
            &Answers::new().with("cuisine", "thai"),
        );

        assert!(cache.get(&newer_snapshot).await.is_none());
        assert!(cache.get(&other_answers).await.is_none());
    }

    #[test]
    fn test_category_is_normalized() {
        let answers = Answers::new();
        assert_eq!(
            RankCacheKey::new(" Real-Estate ", "v1", &answers),
            RankCacheKey::new("real-estate", "v1", &answers)
        );
    }

    #[test]
    fn test_invalidate_all() {
        let cache = RankCache::new(10, 60);
        let key = RankCacheKey::new("generic", "v1", &Answers::new());

        tokio_test::block_on(async {
            cache.insert(key.clone(), ranked()).await;
            cache.invalidate_all();
            assert!(cache.get(&key).await.is_none());
        });
    }
}
