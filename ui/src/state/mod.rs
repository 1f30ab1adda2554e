//! Global State Management
//!
//! This module manages the global application state:
//! - Which view is shown (login or admin)
//! - The rows of the last successful collection load
//! - Decoded claims of the current session, for the header
//!
//! Views never call the backend directly. They call methods on [`AppState`],
//! which run the matching [`AdminController`] operation on the event loop and
//! write the result back into signals.

mod editor;

pub use editor::RowEditor;

use std::rc::Rc;

use leptos::*;
use sku_admin_shared::{Claims, SkuDraft, SkuId, SkuPatch, SkuRecord};

use crate::client::HttpClient;
use crate::config::UiConfig;
use crate::controller::{AddOutcome, AdminController, LoginOutcome, View};
use crate::dialogs::BrowserDialogs;
use crate::session::{LocalTokenStore, Session};

/// Controller wired to the browser implementations
pub type BrowserController = AdminController<HttpClient, LocalTokenStore, BrowserDialogs>;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current top-level view
    pub view: RwSignal<View>,

    /// Rows as returned by the last successful `GET /sku`
    pub rows: RwSignal<Vec<SkuRecord>>,

    /// Claims of the stored token, refreshed on login and page load
    pub claims: RwSignal<Option<Claims>>,

    /// Number of operations waiting on the network
    pub pending: RwSignal<usize>,

    controller: Rc<BrowserController>,
}

impl AppState {
    pub fn new(config: UiConfig) -> Self {
        let session = Session::new(LocalTokenStore::new(config.token_key.clone()));
        let controller = AdminController::new(HttpClient::new(config), session, BrowserDialogs);

        Self {
            view: create_rw_signal(View::LoggedOut),
            rows: create_rw_signal(Vec::new()),
            claims: create_rw_signal(None),
            pending: create_rw_signal(0),
            controller: Rc::new(controller),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.get() > 0
    }

    /// Pick the initial view from the stored token and load data if admitted
    pub fn bootstrap(&self) {
        let view = self.controller.initial_view(js_sys::Date::now());
        self.view.set(view);
        if view == View::LoggedIn {
            self.claims.set(self.controller.session().claims());
            self.reload();
        }
    }

    pub fn login(&self, username: String, password: String) {
        let state = self.clone();
        self.run(async move {
            if let LoginOutcome::Admitted(rows) = state.controller.login(&username, &password).await {
                state.claims.set(state.controller.session().claims());
                state.view.set(View::LoggedIn);
                state.replace_rows(rows);
            }
        });
    }

    pub fn logout(&self) {
        let view = self.controller.logout();
        self.view.set(view);
        self.claims.set(None);
        self.rows.set(Vec::new());
    }

    pub fn reload(&self) {
        let state = self.clone();
        self.run(async move {
            let rows = state.controller.load().await;
            state.replace_rows(rows);
        });
    }

    pub fn save(&self, id: SkuId, patch: SkuPatch) {
        let state = self.clone();
        self.run(async move {
            let rows = state.controller.save(&id, &patch).await;
            state.replace_rows(rows);
        });
    }

    pub fn delete(&self, id: SkuId) {
        let state = self.clone();
        self.run(async move {
            let rows = state.controller.delete(&id).await;
            state.replace_rows(rows);
        });
    }

    /// Add a record; `on_added` runs once the backend accepted it
    pub fn add(&self, draft: SkuDraft, on_added: impl FnOnce() + 'static) {
        let state = self.clone();
        self.run(async move {
            if let AddOutcome::Added(rows) = state.controller.add(&draft).await {
                state.replace_rows(rows);
                on_added();
            }
        });
    }

    /// Full replace; a failed load leaves the current rows alone
    fn replace_rows(&self, rows: Option<Vec<SkuRecord>>) {
        if let Some(rows) = rows {
            self.rows.set(rows);
        }
    }

    /// Run an operation on the event loop. Concurrent operations are not
    /// serialized; whichever finishes last wins.
    fn run(&self, operation: impl std::future::Future<Output = ()> + 'static) {
        let pending = self.pending;
        pending.update(|n| *n += 1);
        spawn_local(async move {
            operation.await;
            pending.update(|n| *n = n.saturating_sub(1));
        });
    }
}
