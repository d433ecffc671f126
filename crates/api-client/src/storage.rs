//! Durable home of the bearer token. The session is the only writer; views
//! never touch storage directly.

use std::sync::{Arc, Mutex};

/// Storage key under which the token string is persisted.
pub const TOKEN_KEY: &str = "token";

/// Where the single persisted token string lives.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Process-local store, used natively and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a token, as after a page reload.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// `window.localStorage`-backed store for the browser build.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTokenStore;

#[cfg(target_arch = "wasm32")]
impl BrowserTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
            .filter(|t| !t.trim().is_empty())
    }

    fn save(&self, token: &str) {
        match Self::storage() {
            Some(s) => {
                if s.set_item(TOKEN_KEY, token).is_err() {
                    tracing::warn!("failed to persist session token");
                }
            }
            None => tracing::warn!("localStorage unavailable, session will not survive reload"),
        }
    }

    fn clear(&self) {
        if let Some(s) = Self::storage() {
            let _ = s.remove_item(TOKEN_KEY);
        }
    }
}

/// The store matching the build target.
pub fn default_store() -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(BrowserTokenStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(MemoryTokenStore::new())
    }
}
