//! Types for the product fetch system.

use async_trait::async_trait;
use thiserror::Error;

use crate::product::Product;

/// Errors that a fetch backend may report.
///
/// Well-behaved backends absorb transient failures and resolve to an
/// empty list; the refresh runner additionally tolerates `Err` by
/// treating it as an empty result, so a misbehaving backend cannot
/// abort a crawl.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetch backend connection failed: {0}")]
    ConnectionFailed(String),

    #[error("fetch backend API error: {0}")]
    ApiError(String),

    #[error("request timeout")]
    Timeout,

    #[error("internal error: {0}")]
    Internal(String),
}

/// Trait for product discovery backends.
#[async_trait]
pub trait ProductFetcher: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Fetch up to `count` products for the given taxonomy pair.
    ///
    /// Returned records are assumed to already carry `category` and
    /// `sub_category` matching the request; callers do not re-validate.
    async fn fetch(
        &self,
        category: &str,
        sub_category: &str,
        count: usize,
    ) -> Result<Vec<Product>, FetchError>;
}
