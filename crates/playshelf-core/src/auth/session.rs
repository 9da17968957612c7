//! Session state for the authenticated user.

use std::sync::Arc;

use anyhow::Result;
use futures::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::StreamExt;

use crate::config::StorageKeys;
use crate::models::User;
use crate::storage::StorageBackend;
use crate::store::Store;

use super::UserDirectory;

/// Session and registration state, built on the persistent reactive store.
///
/// The session holds the authenticated user's public profile, or `None`
/// while anonymous. It moves to authenticated only through a successful
/// [`login`](SessionStore::login) and back only through
/// [`logout`](SessionStore::logout). There is no expiry; a session persists
/// across restarts until explicit logout.
pub struct SessionStore {
    session: Store<Option<User>>,
    directory: UserDirectory,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn StorageBackend>, keys: &StorageKeys) -> Self {
        let session = Store::open(storage.clone(), keys.session.clone(), None);
        let directory = UserDirectory::new(storage, keys.users.clone());
        Self { session, directory }
    }

    /// Check credentials against the user directory.
    ///
    /// On a match the session becomes that user's public profile and `true`
    /// is returned; on a miss the session is left untouched and `false` is
    /// returned. Only a storage-write failure is an error.
    pub fn login(&self, email: &str, password: &str) -> Result<bool> {
        match self.directory.authenticate(email, password) {
            Some(user) => {
                self.session.replace(Some(user.public_profile()))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Register a new user. Registration does not log the user in.
    ///
    /// `Ok(false)` means the email is already taken.
    pub fn register(&self, user: User) -> Result<bool> {
        self.directory.register(user)
    }

    /// Drop the session. Registered users are kept.
    pub fn logout(&self) -> Result<()> {
        self.session.replace(None)
    }

    /// Current session, synchronously.
    pub fn current_user(&self) -> Option<User> {
        self.session.snapshot()
    }

    /// Subscribable session stream; see [`Store::subscribe`] for the replay
    /// contract.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.session.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.snapshot().is_some()
    }

    /// Stream of the derived "session is present" flag; yields the current
    /// value first, then one value per session change.
    pub fn watch_authenticated(&self) -> impl Stream<Item = bool> {
        WatchStream::new(self.subscribe()).map(|user| user.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn new_user(email: &str, password: &str) -> User {
        User {
            id: String::new(),
            name: "Ada".into(),
            email: email.into(),
            password: Some(password.into()),
            avatar: None,
        }
    }

    fn store_on(storage: Arc<dyn StorageBackend>) -> SessionStore {
        SessionStore::new(storage, &StorageKeys::default())
    }

    fn store() -> SessionStore {
        store_on(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn register_then_login_succeeds() {
        let sessions = store();
        assert!(sessions.register(new_user("a@b.com", "secret")).unwrap());
        // Registration alone leaves the session anonymous.
        assert!(!sessions.is_authenticated());

        assert!(sessions.login("a@b.com", "secret").unwrap());
        assert!(sessions.is_authenticated());
        assert_eq!(sessions.current_user().unwrap().email, "a@b.com");
    }

    #[test]
    fn wrong_password_leaves_session_anonymous() {
        let sessions = store();
        sessions.register(new_user("a@b.com", "secret")).unwrap();
        assert!(!sessions.login("a@b.com", "wrong").unwrap());
        assert!(!sessions.is_authenticated());
        assert!(sessions.current_user().is_none());
    }

    #[test]
    fn session_holds_public_profile_without_password() {
        let sessions = store();
        sessions.register(new_user("a@b.com", "secret")).unwrap();
        sessions.login("a@b.com", "secret").unwrap();
        assert!(sessions.current_user().unwrap().password.is_none());
    }

    #[test]
    fn logout_clears_session_but_not_directory() {
        let sessions = store();
        sessions.register(new_user("a@b.com", "secret")).unwrap();
        sessions.login("a@b.com", "secret").unwrap();
        sessions.logout().unwrap();
        assert!(!sessions.is_authenticated());
        // The account still exists.
        assert!(sessions.login("a@b.com", "secret").unwrap());
    }

    #[test]
    fn session_survives_reopen_until_logout() {
        let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
        {
            let sessions = store_on(storage.clone());
            sessions.register(new_user("a@b.com", "secret")).unwrap();
            sessions.login("a@b.com", "secret").unwrap();
        }
        // Simulated restart over the same backend.
        let sessions = store_on(storage.clone());
        assert!(sessions.is_authenticated());

        sessions.logout().unwrap();
        let sessions = store_on(storage);
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn subscribers_observe_login_and_logout() {
        let sessions = store();
        sessions.register(new_user("a@b.com", "secret")).unwrap();
        let mut rx = sessions.subscribe();
        assert!(rx.borrow().is_none());

        sessions.login("a@b.com", "secret").unwrap();
        assert!(rx.borrow_and_update().is_some());

        sessions.logout().unwrap();
        assert!(rx.borrow_and_update().is_none());
    }

    #[tokio::test]
    async fn authenticated_stream_yields_current_value_first() {
        let sessions = store();
        sessions.register(new_user("a@b.com", "secret")).unwrap();
        sessions.login("a@b.com", "secret").unwrap();

        let mut stream = sessions.watch_authenticated();
        assert_eq!(stream.next().await, Some(true));

        sessions.logout().unwrap();
        assert_eq!(stream.next().await, Some(false));
    }
}
