//! Durable directory of registered users.
//!
//! The one component that touches stored credentials. Secrets are stored and
//! compared in plaintext, which is acceptable only at demo scope; to
//! introduce hashing, swap the comparison in
//! [`authenticate`](UserDirectory::authenticate) and the record written by
//! [`register`](UserDirectory::register) - session call sites stay
//! untouched.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use crate::ids;
use crate::models::User;
use crate::storage::StorageBackend;

pub struct UserDirectory {
    storage: Arc<dyn StorageBackend>,
    key: String,
}

impl UserDirectory {
    pub fn new(storage: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// All registered users. Absent or malformed stored content is treated
    /// as an empty directory.
    pub fn users(&self) -> Vec<User> {
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read user directory");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(users) => users,
            Err(e) => {
                warn!(key = %self.key, error = %e, "User directory is malformed, treating as empty");
                Vec::new()
            }
        }
    }

    fn save(&self, users: &[User]) -> Result<()> {
        let contents = serde_json::to_string_pretty(users)?;
        self.storage
            .write(&self.key, &contents)
            .with_context(|| format!("Failed to persist user directory '{}'", self.key))
    }

    /// Find the user whose email and secret both match exactly.
    ///
    /// Case-sensitive, no normalization. A linear scan - plenty at the
    /// directory sizes client-side storage holds.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        self.users()
            .into_iter()
            .find(|u| u.email == email && u.password.as_deref() == Some(password))
    }

    /// Register a new user.
    ///
    /// Returns `Ok(false)` without mutating anything when the email is
    /// already taken (exact match). Otherwise assigns a fresh identifier,
    /// appends, and persists.
    pub fn register(&self, mut user: User) -> Result<bool> {
        let mut users = self.users();
        if users.iter().any(|u| u.email == user.email) {
            return Ok(false);
        }
        user.id = ids::time_derived_id(users.iter().map(|u| u.id.as_str()));
        users.push(user);
        self.save(&users)?;
        Ok(true)
    }
}
