//! Login session

use crate::models::User;
use crate::ClientResult;
use std::cell::RefCell;

/// Where the logged-in user is kept between page loads
pub trait SessionStore {
    fn load(&self) -> Option<User>;
    fn save(&self, user: &User) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

/// Keeps the user in memory only; a reload logs out
#[derive(Debug, Default)]
pub struct MemoryStore {
    user: RefCell<Option<User>>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    fn save(&self, user: &User) -> ClientResult<()> {
        *self.user.borrow_mut() = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        self.user.borrow_mut().take();
        Ok(())
    }
}

/// The authenticated user, if any, backed by a store
#[derive(Debug)]
pub struct Session<S: SessionStore> {
    store: S,
    user: Option<User>,
}

impl<S: SessionStore> Session<S> {
    /// Start a session, picking up a user the store still holds
    pub fn restore(store: S) -> Self {
        let user = store.load();
        if let Some(user) = &user {
            tracing::info!("Restored session for {}", user.user_id);
        }
        Self { store, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The user is logged in even if the store fails; it only loses persistence.
    pub fn login(&mut self, user: User) {
        if let Err(e) = self.store.save(&user) {
            tracing::warn!("Could not persist session: {}", e);
        }
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("Could not clear stored session: {}", e);
        }
        if let Some(user) = self.user.take() {
            tracing::info!("Logged out {}", user.user_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;
    use crate::ClientError;

    fn jane() -> User {
        User {
            user_id: UserId::new("user_jane"),
            name: "jane".into(),
        }
    }

    #[test]
    fn test_login_logout() {
        let mut session = Session::restore(MemoryStore::default());
        assert!(!session.is_authenticated());

        session.login(jane());
        assert_eq!(session.user().map(|u| u.user_id.as_str()), Some("user_jane"));

        session.logout();
        assert!(session.user().is_none());
    }

    #[test]
    fn test_restore_from_store() {
        let store = MemoryStore::default();
        store.save(&jane()).unwrap();

        let mut session = Session::restore(store);
        assert_eq!(session.user(), Some(&jane()));

        session.logout();
        assert!(session.store.load().is_none());
    }

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn load(&self) -> Option<User> {
            None
        }

        fn save(&self, _user: &User) -> ClientResult<()> {
            Err(ClientError::Storage("quota exceeded".into()))
        }

        fn clear(&self) -> ClientResult<()> {
            Err(ClientError::Storage("unavailable".into()))
        }
    }

    #[test]
    fn test_store_failure_keeps_in_memory_session() {
        let mut session = Session::restore(BrokenStore);
        session.login(jane());
        assert!(session.is_authenticated());
        session.logout();
        assert!(!session.is_authenticated());
    }
}
