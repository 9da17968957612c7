//! Remote catalog API.
//!
//! [`ApiClient`] performs the one-shot catalog fetch against a RAWG-style
//! endpoint and maps the third-party records into [`Game`]s. The catalog
//! store consumes it through the [`CatalogFetcher`] seam, so the network
//! edge can be stubbed out.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

use async_trait::async_trait;

use crate::models::Game;

/// One-shot remote catalog source.
///
/// A fetcher performs a single network call and maps the response into the
/// catalog shape. It never touches durable storage; the catalog store
/// decides what to do with the result.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch_popular(&self, api_key: Option<&str>) -> Result<Vec<Game>, ApiError>;
}
