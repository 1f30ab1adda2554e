//! Browser local storage backend

use gloo_storage::{LocalStorage, Storage};

use super::TokenStore;

/// Token store backed by `window.localStorage`.
///
/// The token is stored as the raw string, not JSON encoded, so it stays
/// readable by anything else on the page that expects a plain JWT.
#[derive(Debug, Clone)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        match LocalStorage::raw().get_item(&self.key) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(key = %self.key, error = ?e, "Failed to read session token");
                None
            }
        }
    }

    fn save(&self, token: &str) {
        if let Err(e) = LocalStorage::raw().set_item(&self.key, token) {
            tracing::warn!(key = %self.key, error = ?e, "Failed to persist session token");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}
