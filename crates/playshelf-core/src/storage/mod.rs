//! Durable key-value storage behind the stores.
//!
//! Each store owns exactly one key; no two stores share one, so backends
//! need no cross-key coordination. Values are serialized JSON documents the
//! backend treats as opaque strings.
//!
//! - [`FileStorage`]: one `<key>.json` file per key under a root directory
//! - [`MemoryStorage`]: process-lifetime map, for tests and embedding

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use anyhow::Result;

/// Host-provided persistent key-value mechanism surviving restarts.
pub trait StorageBackend: Send + Sync {
    /// Stored contents for `key`, or `None` if never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `contents` under `key`, replacing any previous value.
    fn write(&self, key: &str, contents: &str) -> Result<()>;

    /// Remove `key` if present.
    fn remove(&self, key: &str) -> Result<()>;
}
