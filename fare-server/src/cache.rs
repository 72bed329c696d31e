//! Caching layer for price predictions.
//!
//! The model is deterministic, so identical feature vectors always price
//! the same. Successful predictions are cached by feature vector to spare
//! the scoring service repeated work. Failures are never cached.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::features::FeatureVector;
use crate::model::{ModelError, Predictor};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Price model with caching.
///
/// Wraps a `Predictor` and caches its answers.
pub struct CachedPredictor {
    predictor: Predictor,
    prices: MokaCache<FeatureVector, f64>,
}

impl CachedPredictor {
    /// Create a new cached predictor.
    pub fn new(predictor: Predictor, config: &CacheConfig) -> Self {
        let prices = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { predictor, prices }
    }

    /// Price a feature vector, using the cache if available.
    pub async fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if let Some(price) = self.prices.get(features).await {
            return Ok(price);
        }

        let price = self.predictor.predict(features).await?;
        self.prices.insert(*features, price).await;

        Ok(price)
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.prices.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.prices.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinearModel, ModelClient, ModelClientConfig};

    fn features() -> FeatureVector {
        FeatureVector::from_raw([1, 0, 1, 0, 2, 2, 0, 11])
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 10_000);
    }

    #[tokio::test]
    async fn caches_successful_predictions() {
        let model = LinearModel::new(500.0, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0]);
        let cached = CachedPredictor::new(Predictor::Linear(model), &CacheConfig::default());
        assert_eq!(cached.cache_entry_count(), 0);

        assert_eq!(cached.predict(&features()).await.unwrap(), 610.0);
        assert_eq!(cached.prices.get(&features()).await, Some(610.0));
        assert_eq!(cached.predict(&features()).await.unwrap(), 610.0);

        cached.prices.run_pending_tasks().await;
        assert_eq!(cached.cache_entry_count(), 1);

        cached.invalidate_cache();
        assert_eq!(cached.prices.get(&features()).await, None);

        cached.prices.run_pending_tasks().await;
        assert_eq!(cached.cache_entry_count(), 0);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let client =
            ModelClient::new(ModelClientConfig::new("http://127.0.0.1:9").with_timeout(2)).unwrap();
        let cached = CachedPredictor::new(Predictor::Remote(client), &CacheConfig::default());

        assert!(cached.predict(&features()).await.is_err());
        assert_eq!(cached.prices.get(&features()).await, None);

        cached.prices.run_pending_tasks().await;
        assert_eq!(cached.cache_entry_count(), 0);
    }
}
