//! Process-wide wiring of config, storage, and stores.

use std::sync::Arc;

use anyhow::Result;

use crate::api::{ApiClient, CatalogFetcher};
use crate::auth::SessionStore;
use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::storage::{FileStorage, StorageBackend};

/// The application's long-lived services, built once at startup and passed
/// by handle to every consumer.
///
/// There is no implicit global: hosts construct one `AppContext` and share
/// it. Each store owns its durable-storage key exclusively, so the stores
/// never contend with each other.
pub struct AppContext {
    pub config: Config,
    pub catalog: CatalogStore,
    pub session: SessionStore,
}

impl AppContext {
    /// Build the context on file-backed storage under the configured data
    /// directory, then run first-run catalog initialization.
    pub async fn initialize(config: Config) -> Result<Self> {
        let storage: Arc<dyn StorageBackend> = Arc::new(FileStorage::new(config.data_dir()?)?);
        Self::with_storage(config, storage).await
    }

    /// Build the context on any storage backend (embedding, tests).
    pub async fn with_storage(config: Config, storage: Arc<dyn StorageBackend>) -> Result<Self> {
        let fetcher: Arc<dyn CatalogFetcher> = Arc::new(ApiClient::new(config.api_url.clone())?);
        let catalog = CatalogStore::new(storage.clone(), &config, fetcher);
        catalog.initialize().await?;
        let session = SessionStore::new(storage, &config.storage_keys);
        Ok(Self {
            config,
            catalog,
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn new_user() -> User {
        User {
            id: String::new(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: Some("secret".into()),
            avatar: None,
        }
    }

    #[tokio::test]
    async fn full_context_round_trips_across_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage: Arc<dyn StorageBackend> =
                Arc::new(FileStorage::new(dir.path()).unwrap());
            let ctx = AppContext::with_storage(Config::default(), storage)
                .await
                .unwrap();
            assert_eq!(ctx.catalog.snapshot().len(), 6);

            assert!(ctx.session.register(new_user()).unwrap());
            assert!(ctx.session.login("ada@example.com", "secret").unwrap());
            ctx.catalog
                .add(crate::models::Game {
                    id: String::new(),
                    title: "Added".into(),
                    description: String::new(),
                    release_date: None,
                    image_url: None,
                    rating: 4.0,
                    downloads: 0,
                    coming_soon: false,
                    platforms: Vec::new(),
                    tags: Vec::new(),
                })
                .unwrap();
        }

        // Fresh context over the same directory: everything was persisted.
        let storage: Arc<dyn StorageBackend> = Arc::new(FileStorage::new(dir.path()).unwrap());
        let ctx = AppContext::with_storage(Config::default(), storage)
            .await
            .unwrap();
        assert_eq!(ctx.catalog.snapshot().len(), 7);
        assert_eq!(ctx.catalog.snapshot()[0].title, "Added");
        assert!(ctx.session.is_authenticated());
        assert_eq!(ctx.session.current_user().unwrap().email, "ada@example.com");
    }
}
