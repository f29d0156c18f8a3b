//! Test doubles and fixtures.
//!
//! Mock implementations of the crate's collaborator traits, used by unit
//! and integration tests (and handy for downstream consumers' tests).

pub mod fixtures;
mod mock_fetcher;
mod mock_medium;

pub use mock_fetcher::{MockFetcher, RecordedFetch};
pub use mock_medium::MockMedium;
