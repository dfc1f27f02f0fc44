//! Process-wide session state: the bearer token and cached user identity.
//!
//! Writers are limited to successful sign-in/sign-up, the refresh cycle, and
//! (forced) logout. Every outgoing request reads the current token at send
//! time rather than holding a snapshot, since a refresh may have replaced it.

use std::sync::{PoisonError, RwLock};

use crate::types::User;

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// In-memory session store shared by the client and its callers.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bearer token, if a session is held.
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    /// Cached identity of the signed-in user.
    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    /// Store a fresh token and user together (sign-in, sign-up, refresh).
    pub fn set_session(&self, token: String, user: User) {
        let mut state = self.write();
        state.token = Some(token);
        state.user = Some(user);
    }

    pub fn set_token(&self, token: String) {
        self.write().token = Some(token);
    }

    pub fn set_user(&self, user: User) {
        self.write().user = Some(user);
    }

    /// Drop the token and user (logout, or an unrecoverable refresh failure).
    pub fn clear(&self) {
        let mut state = self.write();
        state.token = None;
        state.user = None;
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "trader@example.com".to_string(),
            display_name: None,
        }
    }

    #[test]
    fn starts_empty() {
        let store = SessionStore::new();
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn set_session_stores_token_and_user() {
        let store = SessionStore::new();
        store.set_session("T1".to_string(), sample_user());
        assert_eq!(store.token().as_deref(), Some("T1"));
        assert_eq!(store.user().unwrap().email, "trader@example.com");
        assert!(store.is_authenticated());
    }

    #[test]
    fn set_token_replaces_only_the_token() {
        let store = SessionStore::new();
        store.set_session("T1".to_string(), sample_user());
        store.set_token("T2".to_string());
        assert_eq!(store.token().as_deref(), Some("T2"));
        assert!(store.user().is_some());
    }

    #[test]
    fn clear_drops_token_and_user() {
        let store = SessionStore::new();
        store.set_session("T1".to_string(), sample_user());
        store.clear();
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }
}
