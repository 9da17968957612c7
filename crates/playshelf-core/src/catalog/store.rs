//! The catalog store: the authoritative game list with persistence, first-run
//! seeding, remote refresh, CRUD, and derived views.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::api::CatalogFetcher;
use crate::config::Config;
use crate::ids;
use crate::models::{Game, RATING_MAX};
use crate::storage::StorageBackend;
use crate::store::Store;

use super::seed;

/// Download count above which a released title counts as popular.
pub const POPULARITY_THRESHOLD: u64 = 1_000_000;

/// Authoritative catalog of games.
///
/// Mutations go through the underlying [`Store`]: read the snapshot, compute
/// the next list, replace. Single-writer by convention; the remote refresh is
/// the only suspending operation and simply overwrites whatever is local when
/// it completes.
pub struct CatalogStore {
    store: Store<Vec<Game>>,
    fetcher: Arc<dyn CatalogFetcher>,
    remote_fetch: bool,
    api_key: Option<String>,
}

impl CatalogStore {
    pub fn new(
        storage: Arc<dyn StorageBackend>,
        config: &Config,
        fetcher: Arc<dyn CatalogFetcher>,
    ) -> Self {
        let store = Store::open(storage, config.storage_keys.catalog.clone(), Vec::new());
        Self {
            store,
            fetcher,
            remote_fetch: config.features.remote_fetch,
            api_key: config.api_key.clone(),
        }
    }

    /// First-run initialization.
    ///
    /// A non-empty catalog loaded from storage is kept as-is. An empty one
    /// is filled from the remote API when the feature flag and credential
    /// are both present (a failed fetch leaves it empty), and from the
    /// built-in seed otherwise.
    pub async fn initialize(&self) -> Result<()> {
        if !self.store.snapshot().is_empty() {
            return Ok(());
        }
        if self.remote_fetch && self.api_key.is_some() {
            let api_key = self.api_key.clone();
            self.refresh_from_remote(api_key.as_deref()).await?;
        } else {
            let catalog = seed::default_catalog();
            info!(count = catalog.len(), "Seeding default catalog");
            self.store.replace(catalog)?;
        }
        Ok(())
    }

    /// Subscribable stream of the full catalog; see [`Store::subscribe`] for
    /// the replay contract.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Game>> {
        self.store.subscribe()
    }

    /// Current catalog, synchronously.
    pub fn snapshot(&self) -> Vec<Game> {
        self.store.snapshot()
    }

    pub fn get(&self, id: &str) -> Option<Game> {
        self.store.snapshot().into_iter().find(|g| g.id == id)
    }

    /// Add a game, newest first.
    ///
    /// Assigns a fresh identifier when the game arrives without one and
    /// clamps the rating into the 0-5 bound. Returns the item as stored.
    pub fn add(&self, mut game: Game) -> Result<Game> {
        let mut games = self.store.snapshot();
        if game.id.is_empty() {
            game.id = ids::time_derived_id(games.iter().map(|g| g.id.as_str()));
        }
        game.rating = game.rating.clamp(0.0, RATING_MAX);
        games.insert(0, game.clone());
        self.store.replace(games)?;
        Ok(game)
    }

    /// Remove by id. Removing an absent id is a no-op, not an error.
    pub fn remove(&self, id: &str) -> Result<()> {
        let games: Vec<Game> = self
            .store
            .snapshot()
            .into_iter()
            .filter(|g| g.id != id)
            .collect();
        self.store.replace(games)
    }

    /// Replace the game whose id matches. No match means no change; update
    /// never inserts.
    pub fn update(&self, mut game: Game) -> Result<()> {
        let mut games = self.store.snapshot();
        match games.iter_mut().find(|g| g.id == game.id) {
            Some(slot) => {
                game.rating = game.rating.clamp(0.0, RATING_MAX);
                *slot = game;
                self.store.replace(games)
            }
            None => Ok(()),
        }
    }

    /// Released titles above the popularity threshold, best-rated first.
    /// A read-only projection over the current snapshot, never persisted.
    pub fn most_popular(&self) -> Vec<Game> {
        let mut games: Vec<Game> = self
            .store
            .snapshot()
            .into_iter()
            .filter(|g| g.downloads > POPULARITY_THRESHOLD && !g.coming_soon)
            .collect();
        games.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        games
    }

    /// Released titles above the popularity threshold, most downloaded
    /// first.
    pub fn most_downloaded(&self) -> Vec<Game> {
        let mut games: Vec<Game> = self
            .store
            .snapshot()
            .into_iter()
            .filter(|g| g.downloads > POPULARITY_THRESHOLD && !g.coming_soon)
            .collect();
        games.sort_by(|a, b| b.downloads.cmp(&a.downloads));
        games
    }

    /// Titles flagged as not yet released.
    pub fn coming_soon(&self) -> Vec<Game> {
        self.store
            .snapshot()
            .into_iter()
            .filter(|g| g.coming_soon)
            .collect()
    }

    /// Refresh the catalog from the remote API.
    ///
    /// A successful fetch overwrites the local catalog wholesale, persists,
    /// and publishes. A fetch failure is logged and the existing local list
    /// is returned unchanged - remote trouble never corrupts local state.
    /// Only a storage-write failure is an error.
    pub async fn refresh_from_remote(&self, api_key: Option<&str>) -> Result<Vec<Game>> {
        match self.fetcher.fetch_popular(api_key).await {
            Ok(games) => {
                info!(count = games.len(), "Remote catalog fetched, replacing local data");
                self.store.replace(games.clone())?;
                Ok(games)
            }
            Err(e) => {
                warn!(error = %e, "Remote catalog fetch failed, keeping local data");
                Ok(self.store.snapshot())
            }
        }
    }
}
