//! The generic persistent reactive store.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::watch;
use tracing::warn;

use crate::storage::StorageBackend;

/// In-memory authoritative holder of one value, mirrored to durable storage,
/// with subscriber notification.
///
/// The in-memory value is the source of truth; storage is a mirror kept
/// consistent on every mutation. [`replace`](Store::replace) writes through
/// to storage *before* notifying subscribers, so memory and mirror never
/// diverge at an observable instant.
///
/// Mutation is single-writer by convention: higher-level operations read the
/// current snapshot, compute the next value, and `replace` it. Overlapping
/// writers are not coordinated - last write wins.
pub struct Store<T> {
    storage: Arc<dyn StorageBackend>,
    key: String,
    tx: watch::Sender<T>,
}

impl<T> Store<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Open the store by reading durable storage at `key`.
    ///
    /// Absent, unreadable, or malformed stored content falls back to
    /// `default`. A corrupt mirror is never surfaced to readers; it is
    /// logged and overwritten by the next mutation.
    pub fn open(storage: Arc<dyn StorageBackend>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let value = Self::load(storage.as_ref(), &key).unwrap_or(default);
        let (tx, _) = watch::channel(value);
        Self { storage, key, tx }
    }

    fn load(storage: &dyn StorageBackend, key: &str) -> Option<T> {
        let raw = match storage.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Failed to read stored value, using default");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Stored value is malformed, using default");
                None
            }
        }
    }

    /// Current value, read synchronously. Never blocks, never fails.
    pub fn snapshot(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Subscribe to the store's value.
    ///
    /// Replay contract: the value current at subscription time is readable
    /// immediately through [`watch::Receiver::borrow`], and every later
    /// [`replace`](Store::replace) wakes `changed()`. A receiver that falls
    /// behind observes the latest value rather than every intermediate one.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Replace the value: persist to storage, then notify subscribers.
    ///
    /// This is the single mutation primitive. A storage-write failure is
    /// returned to the caller and the in-memory value stays unchanged,
    /// preserving memory/mirror consistency. Writes are not retried.
    pub fn replace(&self, next: T) -> Result<()> {
        let contents = serde_json::to_string_pretty(&next)
            .with_context(|| format!("Failed to serialize value for key '{}'", self.key))?;
        self.storage
            .write(&self.key, &contents)
            .with_context(|| format!("Failed to persist value for key '{}'", self.key))?;
        self.tx.send_replace(next);
        Ok(())
    }

    /// The exclusive durable-storage key this store owns.
    pub fn key(&self) -> &str {
        &self.key
    }
}
