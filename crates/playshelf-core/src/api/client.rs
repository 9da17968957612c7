//! HTTP client for the remote game catalog.
//!
//! Talks to a RAWG-style listing endpoint: one GET on `/games`, query
//! parameterized by API key, ordering, and page size. The response's
//! `results` records are mapped field-by-field into [`Game`], with
//! documented defaults for anything the remote side omits.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::models::Game;

use super::{ApiError, CatalogFetcher};

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Ordering directive for the catalog listing: best-rated first.
const ORDERING: &str = "-rating";

/// Page size for the catalog listing.
const PAGE_SIZE: u32 = 12;

/// Tags carried over per game from the remote records.
const MAX_TAGS: usize = 3;

/// Description used when the remote record has none.
const DESCRIPTION_PLACEHOLDER: &str = "No description available";

/// Maximum number of retries for rate-limited (429) requests.
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds for rate limiting.
const INITIAL_BACKOFF_MS: u64 = 1000;

// ============================================================================
// Remote record shapes (only the fields the mapping needs)
// ============================================================================

#[derive(Debug, Deserialize)]
struct GameListResponse {
    #[serde(default)]
    results: Vec<RemoteGame>,
}

#[derive(Debug, Deserialize)]
struct RemoteGame {
    id: i64,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    background_image: Option<String>,
    #[serde(default)]
    rating: f32,
    #[serde(default)]
    released: Option<String>,
    #[serde(default)]
    tba: bool,
    #[serde(default)]
    added: u64,
    #[serde(default)]
    platforms: Vec<RemotePlatformEntry>,
    #[serde(default)]
    tags: Vec<RemoteTag>,
}

#[derive(Debug, Deserialize)]
struct RemotePlatformEntry {
    platform: RemotePlatform,
}

#[derive(Debug, Deserialize)]
struct RemotePlatform {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RemoteTag {
    name: String,
}

impl RemoteGame {
    /// Map a remote record into the catalog shape.
    ///
    /// Defaults for absent fields: placeholder description, rating 0 (the
    /// remote scale is already 0-5), empty platform/tag lists. Tags are
    /// capped at the first [`MAX_TAGS`].
    fn into_game(self) -> Game {
        Game {
            id: self.id.to_string(),
            title: self.name,
            description: self
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string()),
            release_date: self.released,
            image_url: self.background_image,
            rating: self.rating,
            downloads: self.added,
            coming_soon: self.tba,
            platforms: self.platforms.into_iter().map(|p| p.platform.name).collect(),
            tags: self.tags.into_iter().take(MAX_TAGS).map(|t| t.name).collect(),
        }
    }
}

/// Client for the remote catalog API.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against `base_url` (e.g. `https://api.rawg.io/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn get_games(&self, api_key: Option<&str>) -> Result<GameListResponse, ApiError> {
        let url = format!("{}/games", self.base_url);
        let page_size = PAGE_SIZE.to_string();
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let mut request = self
                .client
                .get(&url)
                .query(&[("ordering", ORDERING), ("page_size", page_size.as_str())]);
            if let Some(key) = api_key {
                request = request.query(&[("key", key)]);
            }

            let response = request.send().await?;
            if response.status().is_success() {
                return response
                    .json()
                    .await
                    .map_err(|e| ApiError::InvalidResponse(e.to_string()));
            }
            if response.status().as_u16() == 429 {
                retries += 1;
                if retries > MAX_RATE_LIMIT_RETRIES {
                    return Err(ApiError::RateLimited);
                }
                warn!(url = %url, retry = retries, backoff_ms, "Rate limited, backing off");
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                backoff_ms *= 2;
                continue;
            }
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }
    }
}

#[async_trait]
impl CatalogFetcher for ApiClient {
    async fn fetch_popular(&self, api_key: Option<&str>) -> Result<Vec<Game>, ApiError> {
        let response = self.get_games(api_key).await?;
        Ok(response
            .results
            .into_iter()
            .map(RemoteGame::into_game)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_full_remote_record() {
        let json = r#"{
            "id": 3498,
            "name": "Grand Theft Auto V",
            "background_image": "https://media.rawg.io/media/games/gta5.jpg",
            "rating": 4.47,
            "released": "2013-09-17",
            "tba": false,
            "added": 19234,
            "platforms": [
                {"platform": {"id": 4, "name": "PC"}},
                {"platform": {"id": 187, "name": "PlayStation 5"}}
            ],
            "tags": [
                {"name": "Open World"},
                {"name": "Action"},
                {"name": "Crime"},
                {"name": "Driving"}
            ]
        }"#;
        let remote: RemoteGame = serde_json::from_str(json).unwrap();
        let game = remote.into_game();
        assert_eq!(game.id, "3498");
        assert_eq!(game.title, "Grand Theft Auto V");
        assert_eq!(game.rating, 4.47);
        assert_eq!(game.downloads, 19234);
        assert_eq!(game.release_date.as_deref(), Some("2013-09-17"));
        assert!(!game.coming_soon);
        assert_eq!(game.platforms, vec!["PC", "PlayStation 5"]);
        // Tags are capped at MAX_TAGS.
        assert_eq!(game.tags, vec!["Open World", "Action", "Crime"]);
    }

    #[test]
    fn absent_fields_get_documented_defaults() {
        let remote: RemoteGame = serde_json::from_str(r#"{"id": 1, "name": "Mystery"}"#).unwrap();
        let game = remote.into_game();
        assert_eq!(game.description, DESCRIPTION_PLACEHOLDER);
        assert_eq!(game.rating, 0.0);
        assert_eq!(game.downloads, 0);
        assert!(game.release_date.is_none());
        assert!(game.image_url.is_none());
        assert!(game.platforms.is_empty());
        assert!(game.tags.is_empty());
    }

    #[test]
    fn empty_description_also_gets_placeholder() {
        let remote: RemoteGame =
            serde_json::from_str(r#"{"id": 1, "name": "Quiet", "description": ""}"#).unwrap();
        assert_eq!(remote.into_game().description, DESCRIPTION_PLACEHOLDER);
    }

    #[test]
    fn response_without_results_parses_empty() {
        let response: GameListResponse = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        // Nothing listens on this port; the connection is refused locally.
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        match client.fetch_popular(None).await {
            Err(ApiError::NetworkError(_)) => {}
            other => panic!("expected network error, got {other:?}"),
        }
    }
}
