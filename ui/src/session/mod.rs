//! Session Management
//!
//! The session is the only shared mutable state in the panel: one raw token
//! string, written by login and cleared by logout. [`Session`] wraps a
//! [`TokenStore`] so the rest of the app reads and writes it through explicit
//! calls instead of a global.

mod local;

pub use local::LocalTokenStore;

use std::cell::RefCell;
use std::rc::Rc;

use sku_admin_shared::{decode_claims, Claims, Gate};

/// Persistence for the raw session token
pub trait TokenStore {
    fn load(&self) -> Option<String>;

    fn save(&self, token: &str);

    fn clear(&self);
}

/// In-memory token store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::default();
        *store.slot.borrow_mut() = Some(token.into());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

/// Explicit session object passed through the app
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    pub fn set_token(&self, token: &str) {
        self.store.save(token);
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    /// Check the stored token against the admin gate at `now_ms`
    pub fn gate(&self, now_ms: f64) -> Gate {
        Gate::evaluate(self.token().as_deref(), now_ms)
    }

    /// Decoded claims of the stored token, if it decodes at all
    pub fn claims(&self) -> Option<Claims> {
        decode_claims(&self.token()?).ok()
    }
}
