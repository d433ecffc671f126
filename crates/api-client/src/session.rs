use std::sync::{Arc, RwLock};

use shared_types::Identity;

use crate::storage::TokenStore;
use crate::token::decode_identity;

/// The client's record of being signed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
}

impl Session {
    /// Build a session from a raw token, deriving the display identity.
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let identity = decode_identity(&token);
        Self { token, identity }
    }
}

/// Single read/write boundary for the session.
///
/// Auth forms write it, logout and 401 answers clear it, everything else only
/// reads. Clones share the same underlying state.
#[derive(Clone)]
pub struct SessionHandle {
    current: Arc<RwLock<Option<Session>>>,
    store: Arc<dyn TokenStore>,
}

impl SessionHandle {
    /// Create a handle and restore any token already persisted in `store`.
    pub fn restore(store: Arc<dyn TokenStore>) -> Self {
        let current = store
            .load()
            .filter(|t| !t.trim().is_empty())
            .map(Session::from_token);
        if current.is_some() {
            tracing::debug!("restored persisted session");
        }
        Self {
            current: Arc::new(RwLock::new(current)),
            store,
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().ok().and_then(|s| s.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .ok()
            .and_then(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a freshly issued token and return the derived session.
    pub fn establish(&self, token: &str) -> Session {
        let session = Session::from_token(token.trim());
        self.store.save(&session.token);
        if let Ok(mut slot) = self.current.write() {
            *slot = Some(session.clone());
        }
        tracing::debug!(role = session.identity.role.as_str(), "session established");
        session
    }

    /// Drop the session from memory and storage.
    pub fn clear(&self) {
        self.store.clear();
        if let Ok(mut slot) = self.current.write() {
            *slot = None;
        }
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.current, &other.current)
    }
}
