//! Catalog module: the game list store and its built-in seed data.
//!
//! [`CatalogStore`] owns the authoritative game list: first-run seeding or
//! remote fill, CRUD over the sequence, derived read-only views, and a
//! remote refresh that degrades gracefully to local data.

pub mod seed;
pub mod store;

pub use store::{CatalogStore, POPULARITY_THRESHOLD};
