//! Core library for playshelf, a small game-catalog client.
//!
//! Everything revolves around one pattern: a persistent reactive store
//! ([`Store`]) that holds the authoritative in-memory copy of a value,
//! mirrors it to durable storage on every mutation, and broadcasts changes
//! to subscribers. Two instances back the app:
//!
//! - [`CatalogStore`]: the game list, with first-run seeding, CRUD, derived
//!   views, and an optional remote refresh that degrades gracefully to
//!   local data
//! - [`SessionStore`]: the authenticated user (or anonymous), plus the
//!   durable registered-user directory behind login and registration
//!
//! Hosts construct an [`AppContext`] once at startup and hand it to the UI
//! layer. All deployment-specific settings (remote endpoint, credential,
//! feature flags, storage keys) come in through [`Config`].

pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod context;
mod ids;
pub mod models;
pub mod storage;
pub mod store;

pub use api::{ApiClient, ApiError, CatalogFetcher};
pub use auth::{SessionStore, UserDirectory};
pub use catalog::CatalogStore;
pub use config::Config;
pub use context::AppContext;
pub use models::{Game, User};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::Store;
