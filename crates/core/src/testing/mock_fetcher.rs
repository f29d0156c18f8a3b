//! Mock product fetcher for testing.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::fetcher::{FetchError, ProductFetcher};
use crate::product::Product;

/// A recorded fetch call for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedFetch {
    pub category: String,
    pub sub_category: String,
    pub count: usize,
}

/// Mock implementation of the [`ProductFetcher`] trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable results per (category, subcategory) pair
/// - Track fetch calls for assertions
/// - Simulate failures and delays
pub struct MockFetcher {
    /// Results keyed by (category, subcategory). Pairs without an entry
    /// resolve to an empty list, like a well-behaved backend.
    results: RwLock<HashMap<(String, String), Vec<Product>>>,
    /// Pairs configured to return an error instead.
    failing: RwLock<HashMap<(String, String), String>>,
    /// Recorded fetch calls.
    calls: RwLock<Vec<RecordedFetch>>,
    /// Optional artificial latency per fetch.
    delay: RwLock<Option<Duration>>,
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            results: RwLock::new(HashMap::new()),
            failing: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
            delay: RwLock::new(None),
        }
    }

    /// Configure the products returned for a taxonomy pair.
    pub async fn set_results(&self, category: &str, sub_category: &str, products: Vec<Product>) {
        self.results
            .write()
            .await
            .insert((category.to_string(), sub_category.to_string()), products);
    }

    /// Make fetches for a taxonomy pair fail with an API error.
    pub async fn fail_pair(&self, category: &str, sub_category: &str, message: &str) {
        self.failing.write().await.insert(
            (category.to_string(), sub_category.to_string()),
            message.to_string(),
        );
    }

    /// Add artificial latency to every fetch.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// All recorded fetch calls, in order.
    pub async fn recorded_fetches(&self) -> Vec<RecordedFetch> {
        self.calls.read().await.clone()
    }

    /// Number of fetches performed.
    pub async fn fetch_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl ProductFetcher for MockFetcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(
        &self,
        category: &str,
        sub_category: &str,
        count: usize,
    ) -> Result<Vec<Product>, FetchError> {
        self.calls.write().await.push(RecordedFetch {
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            count,
        });

        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }

        let key = (category.to_string(), sub_category.to_string());

        if let Some(message) = self.failing.read().await.get(&key) {
            return Err(FetchError::ApiError(message.clone()));
        }

        let results = self.results.read().await;
        let products = results
            .get(&key)
            .map(|p| p.iter().take(count).cloned().collect())
            .unwrap_or_default();
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_unconfigured_pair_returns_empty() {
        let fetcher = MockFetcher::new();
        let products = fetcher.fetch("Cat", "Sub", 5).await.unwrap();
        assert!(products.is_empty());
        assert_eq!(fetcher.fetch_count().await, 1);
    }

    #[tokio::test]
    async fn test_configured_results_respect_count() {
        let fetcher = MockFetcher::new();
        fetcher
            .set_results(
                "Cat",
                "Sub",
                vec![
                    fixtures::product("a"),
                    fixtures::product("b"),
                    fixtures::product("c"),
                ],
            )
            .await;

        let products = fetcher.fetch("Cat", "Sub", 2).await.unwrap();
        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn test_failing_pair() {
        let fetcher = MockFetcher::new();
        fetcher.fail_pair("Cat", "Sub", "boom").await;

        let result = fetcher.fetch("Cat", "Sub", 5).await;
        assert!(matches!(result, Err(FetchError::ApiError(_))));

        // Other pairs are unaffected.
        assert!(fetcher.fetch("Cat", "Other", 5).await.is_ok());
    }

    #[tokio::test]
    async fn test_recorded_fetches() {
        let fetcher = MockFetcher::new();
        fetcher.fetch("A", "X", 1).await.unwrap();
        fetcher.fetch("B", "Y", 2).await.unwrap();

        let calls = fetcher.recorded_fetches().await;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].category, "A");
        assert_eq!(calls[1].sub_category, "Y");
        assert_eq!(calls[1].count, 2);
    }
}
