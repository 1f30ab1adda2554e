//! Admin Controller
//!
//! Every user-facing operation of the panel lives here, independent of the
//! DOM: login, logout, loading the collection, and saving, deleting and
//! adding rows. Failures are reported to the user through [`Dialogs`] and are
//! terminal for the action that triggered them; nothing is retried.
//!
//! Mutations never patch the displayed rows locally. A successful mutation is
//! always followed by a full `GET /sku`, and the caller replaces the table
//! with whatever that returns.

use sku_admin_shared::{
    decode_claims, DraftError, Gate, LoginRequest, SkuDraft, SkuId, SkuPatch, SkuRecord,
};

use crate::client::{AdminApi, AdminClientError};
use crate::dialogs::Dialogs;
use crate::session::{Session, TokenStore};

/// User-facing alert texts
pub mod messages {
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
    pub const NETWORK_ERROR: &str = "Network error. Check the connection to the backend.";
    /// Transport failure while saving, deleting or adding
    pub const MUTATION_NETWORK_ERROR: &str = "Network error.";
    pub const SUPERUSER_ONLY: &str = "Access is restricted to superusers only.";
    pub const LOAD_ERROR: &str = "Failed to load data. Check your token.";
    pub const SAVE_ERROR: &str = "Failed to save changes.";
    pub const DELETE_ERROR: &str = "Failed to delete the record.";
    pub const ADD_ERROR: &str = "Failed to add the record.";
    pub const FIELDS_REQUIRED: &str = "Please fill in all required fields.";
    pub const CONFIRM_DELETE: &str = "Delete this record?";
}

use messages::*;

/// Which top-level view is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    LoggedOut,
    LoggedIn,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Entered the admin view. Holds the rows of the first load unless that
    /// load failed.
    Admitted(Option<Vec<SkuRecord>>),
    /// Credentials accepted but the role is not allowed in
    Denied,
    /// Bad credentials, no response, or a token that does not decode
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The record was created. Holds the rows of the follow-up reload unless
    /// that reload failed.
    Added(Option<Vec<SkuRecord>>),
    /// Rejected client side, nothing was sent
    Invalid(DraftError),
    Failed,
}

pub struct AdminController<A, S, D> {
    api: A,
    session: Session<S>,
    dialogs: D,
}

impl<A, S, D> AdminController<A, S, D>
where
    A: AdminApi,
    S: TokenStore,
    D: Dialogs,
{
    pub fn new(api: A, session: Session<S>, dialogs: D) -> Self {
        Self {
            api,
            session,
            dialogs,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    /// Decide the view on page load. Bad tokens fall back to the login view
    /// without any alert.
    pub fn initial_view(&self, now_ms: f64) -> View {
        match self.session.gate(now_ms) {
            Gate::Admitted(_) => {
                tracing::info!("Stored session admitted");
                View::LoggedIn
            }
            Gate::Missing => View::LoggedOut,
            Gate::Rejected(claims) => {
                tracing::debug!(role = ?claims.role, exp = ?claims.exp, "Stored session rejected");
                View::LoggedOut
            }
            Gate::Undecodable(e) => {
                tracing::debug!(error = %e, "Stored session token unreadable");
                View::LoggedOut
            }
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> LoginOutcome {
        let request = LoginRequest::new(username, password);
        let response = match self.api.login(&request).await {
            Ok(response) => response,
            Err(e) => {
                self.report(&e, INVALID_CREDENTIALS, NETWORK_ERROR);
                return LoginOutcome::Failed;
            }
        };

        // The token is persisted before the role check, even when entry is
        // denied below. The gate rejects it again on the next page load.
        self.session.set_token(&response.token);

        match decode_claims(&response.token) {
            Ok(claims) if claims.is_superuser() => {
                tracing::info!("Logged in");
                LoginOutcome::Admitted(self.load().await)
            }
            Ok(claims) => {
                tracing::info!(role = ?claims.role, "Login denied for role");
                self.dialogs.alert(SUPERUSER_ONLY);
                LoginOutcome::Denied
            }
            // Same alert as a failed request; the token stays stored
            Err(e) => {
                tracing::warn!(error = %e, "Login returned an unreadable token");
                self.dialogs.alert(NETWORK_ERROR);
                LoginOutcome::Failed
            }
        }
    }

    pub fn logout(&self) -> View {
        self.session.clear();
        tracing::info!("Logged out");
        View::LoggedOut
    }

    /// Fetch the whole collection
    pub async fn load(&self) -> Option<Vec<SkuRecord>> {
        let token = self.require_token(LOAD_ERROR)?;

        match self.api.list_skus(&token).await {
            Ok(rows) => {
                tracing::debug!(count = rows.len(), "Loaded SKU records");
                Some(rows)
            }
            Err(e) => {
                self.report(&e, LOAD_ERROR, NETWORK_ERROR);
                None
            }
        }
    }

    /// Send the edited fields of one row, then reload
    pub async fn save(&self, id: &SkuId, patch: &SkuPatch) -> Option<Vec<SkuRecord>> {
        let token = self.require_token(SAVE_ERROR)?;

        match self.api.update_sku(&token, id, patch).await {
            Ok(()) => {
                tracing::info!(%id, fields = patch.len(), "Saved SKU record");
                self.load().await
            }
            Err(e) => {
                self.report(&e, SAVE_ERROR, MUTATION_NETWORK_ERROR);
                None
            }
        }
    }

    /// Delete one row after the user confirms, then reload.
    /// Returns `None` without sending anything when the user cancels.
    pub async fn delete(&self, id: &SkuId) -> Option<Vec<SkuRecord>> {
        if !self.dialogs.confirm(CONFIRM_DELETE) {
            tracing::debug!(%id, "Delete cancelled");
            return None;
        }
        let token = self.require_token(DELETE_ERROR)?;

        match self.api.delete_sku(&token, id).await {
            Ok(()) => {
                tracing::info!(%id, "Deleted SKU record");
                self.load().await
            }
            Err(e) => {
                self.report(&e, DELETE_ERROR, MUTATION_NETWORK_ERROR);
                None
            }
        }
    }

    /// Validate and create a record, then reload
    pub async fn add(&self, draft: &SkuDraft) -> AddOutcome {
        let new_sku = match draft.validate() {
            Ok(new_sku) => new_sku,
            Err(e) => {
                tracing::debug!(error = %e, "Add rejected");
                self.dialogs.alert(FIELDS_REQUIRED);
                return AddOutcome::Invalid(e);
            }
        };
        let Some(token) = self.require_token(ADD_ERROR) else {
            return AddOutcome::Failed;
        };

        match self.api.create_sku(&token, &new_sku).await {
            Ok(()) => {
                tracing::info!(sku = %new_sku.sku, "Added SKU record");
                AddOutcome::Added(self.load().await)
            }
            Err(e) => {
                self.report(&e, ADD_ERROR, MUTATION_NETWORK_ERROR);
                AddOutcome::Failed
            }
        }
    }

    fn require_token(&self, failure: &str) -> Option<String> {
        let token = self.session.token();
        if token.is_none() {
            tracing::warn!(error = %AdminClientError::NotAuthenticated, "Operation failed");
            self.dialogs.alert(failure);
        }
        token
    }

    /// Transport failures get the `network` alert, everything else the
    /// operation's own text
    fn report(&self, error: &AdminClientError, failure: &str, network: &str) {
        tracing::warn!(%error, "Operation failed");
        if error.is_transport() {
            self.dialogs.alert(network);
        } else {
            self.dialogs.alert(failure);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;
    use sku_admin_shared::{encode_test_token, LoginResponse, NewSku, SkuField};

    use super::*;
    use crate::session::MemoryTokenStore;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Login(LoginRequest),
        List(String),
        Create(String, NewSku),
        Update(String, SkuId, SkuPatch),
        Delete(String, SkuId),
    }

    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<Call>>,
        token: RefCell<String>,
        rows: RefCell<Vec<SkuRecord>>,
        /// Scripted results for the next calls, in order. `None` succeeds.
        script: RefCell<VecDeque<Option<AdminClientError>>>,
    }

    impl FakeApi {
        fn issuing(token: String) -> Self {
            let api = Self::default();
            *api.token.borrow_mut() = token;
            api
        }

        fn fail_next(&self, error: AdminClientError) {
            self.script.borrow_mut().push_back(Some(error));
        }

        fn succeed_next(&self) {
            self.script.borrow_mut().push_back(None);
        }

        fn record(&self, call: Call) -> Result<(), AdminClientError> {
            self.calls.borrow_mut().push(call);
            match self.script.borrow_mut().pop_front().flatten() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl AdminApi for FakeApi {
        async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AdminClientError> {
            self.record(Call::Login(request.clone()))?;
            Ok(LoginResponse {
                token: self.token.borrow().clone(),
            })
        }

        async fn list_skus(&self, token: &str) -> Result<Vec<SkuRecord>, AdminClientError> {
            self.record(Call::List(token.to_string()))?;
            Ok(self.rows.borrow().clone())
        }

        async fn create_sku(&self, token: &str, sku: &NewSku) -> Result<(), AdminClientError> {
            self.record(Call::Create(token.to_string(), sku.clone()))
        }

        async fn update_sku(
            &self,
            token: &str,
            id: &SkuId,
            patch: &SkuPatch,
        ) -> Result<(), AdminClientError> {
            self.record(Call::Update(token.to_string(), id.clone(), patch.clone()))
        }

        async fn delete_sku(&self, token: &str, id: &SkuId) -> Result<(), AdminClientError> {
            self.record(Call::Delete(token.to_string(), id.clone()))
        }
    }

    #[derive(Default)]
    struct FakeDialogs {
        alerts: RefCell<Vec<String>>,
        confirms: Cell<usize>,
        answer: Cell<bool>,
    }

    impl Dialogs for FakeDialogs {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, _message: &str) -> bool {
            self.confirms.set(self.confirms.get() + 1);
            self.answer.get()
        }
    }

    type TestController = AdminController<FakeApi, MemoryTokenStore, FakeDialogs>;

    const NOW_MS: f64 = 1_700_000_000_000.0;

    fn superuser_token() -> String {
        encode_test_token(&json!({"role": "superuser", "exp": 1_900_000_000}))
    }

    fn viewer_token() -> String {
        encode_test_token(&json!({"role": "viewer", "exp": 1_900_000_000}))
    }

    fn controller(api: FakeApi, store: MemoryTokenStore) -> TestController {
        AdminController::new(api, Session::new(store), FakeDialogs::default())
    }

    fn logged_in(rows: Vec<SkuRecord>) -> (TestController, String) {
        let token = superuser_token();
        let api = FakeApi::default();
        *api.rows.borrow_mut() = rows;
        (controller(api, MemoryTokenStore::with_token(token.clone())), token)
    }

    fn record(id: i64, sku: &str) -> SkuRecord {
        serde_json::from_value(json!({"id": id, "sku": sku, "plan_margin": 10, "plan_orders": 5}))
            .unwrap()
    }

    fn alerts(controller: &TestController) -> Vec<String> {
        controller.dialogs().alerts.borrow().clone()
    }

    #[test]
    fn test_initial_view() {
        let missing = controller(FakeApi::default(), MemoryTokenStore::new());
        assert_eq!(missing.initial_view(NOW_MS), View::LoggedOut);

        let admitted = controller(FakeApi::default(), MemoryTokenStore::with_token(superuser_token()));
        assert_eq!(admitted.initial_view(NOW_MS), View::LoggedIn);

        let viewer = controller(FakeApi::default(), MemoryTokenStore::with_token(viewer_token()));
        assert_eq!(viewer.initial_view(NOW_MS), View::LoggedOut);

        let expired = encode_test_token(&json!({"role": "superuser", "exp": 1_600_000_000}));
        let expired = controller(FakeApi::default(), MemoryTokenStore::with_token(expired));
        assert_eq!(expired.initial_view(NOW_MS), View::LoggedOut);

        let garbage = controller(FakeApi::default(), MemoryTokenStore::with_token("not-a-jwt"));
        assert_eq!(garbage.initial_view(NOW_MS), View::LoggedOut);
        assert!(alerts(&garbage).is_empty());
        // Unreadable tokens are left in place; only logout clears storage
        assert!(garbage.session().token().is_some());
    }

    #[test]
    fn test_superuser_login_loads_with_bearer_token() {
        let token = superuser_token();
        let api = FakeApi::issuing(token.clone());
        *api.rows.borrow_mut() = vec![record(1, "A")];
        let controller = controller(api, MemoryTokenStore::new());

        let outcome = block_on(controller.login("a", "b"));

        assert_eq!(outcome, LoginOutcome::Admitted(Some(vec![record(1, "A")])));
        assert_eq!(controller.session().token(), Some(token.clone()));
        assert_eq!(
            controller.api().calls(),
            vec![Call::Login(LoginRequest::new("a", "b")), Call::List(token)]
        );
        assert!(alerts(&controller).is_empty());
    }

    #[test]
    fn test_viewer_login_denied_but_token_kept() {
        let token = viewer_token();
        let controller = controller(FakeApi::issuing(token.clone()), MemoryTokenStore::new());

        let outcome = block_on(controller.login("a", "b"));

        assert_eq!(outcome, LoginOutcome::Denied);
        assert_eq!(alerts(&controller), vec![SUPERUSER_ONLY]);
        assert_eq!(controller.session().token(), Some(token));
        assert_eq!(controller.api().calls().len(), 1);
        assert_eq!(controller.initial_view(NOW_MS), View::LoggedOut);
    }

    #[test]
    fn test_login_failures() {
        let controller = controller(FakeApi::issuing(superuser_token()), MemoryTokenStore::new());

        controller.api().fail_next(AdminClientError::Status {
            status: 401,
            text: "Unauthorized".to_string(),
        });
        assert_eq!(block_on(controller.login("a", "wrong")), LoginOutcome::Failed);

        controller
            .api()
            .fail_next(AdminClientError::Network("connection refused".to_string()));
        assert_eq!(block_on(controller.login("a", "b")), LoginOutcome::Failed);

        assert_eq!(alerts(&controller), vec![INVALID_CREDENTIALS, NETWORK_ERROR]);
        assert!(controller.session().token().is_none());
    }

    #[test]
    fn test_unreadable_login_token_alerts_network_error() {
        let controller = controller(FakeApi::issuing("not-a-jwt".to_string()), MemoryTokenStore::new());

        let outcome = block_on(controller.login("a", "b"));

        assert_eq!(outcome, LoginOutcome::Failed);
        assert_eq!(alerts(&controller), vec![NETWORK_ERROR]);
        assert_eq!(controller.session().token().as_deref(), Some("not-a-jwt"));
        assert_eq!(controller.api().calls().len(), 1);
    }

    #[test]
    fn test_admitted_even_when_first_load_fails() {
        let controller = controller(FakeApi::issuing(superuser_token()), MemoryTokenStore::new());
        controller.api().succeed_next();
        controller.api().fail_next(AdminClientError::Status {
            status: 500,
            text: "Internal Server Error".to_string(),
        });

        let outcome = block_on(controller.login("a", "b"));

        assert_eq!(outcome, LoginOutcome::Admitted(None));
        assert_eq!(alerts(&controller), vec![LOAD_ERROR]);
    }

    #[test]
    fn test_save_sends_patch_then_reloads() {
        let (controller, token) = logged_in(vec![record(7, "A")]);
        let patch = SkuPatch::new().with(SkuField::PlanMargin, 15);

        // The server now returns a different collection
        *controller.api().rows.borrow_mut() = vec![record(7, "A"), record(8, "B")];
        let rows = block_on(controller.save(&SkuId::from(7), &patch));

        assert_eq!(rows, Some(vec![record(7, "A"), record(8, "B")]));
        assert_eq!(
            controller.api().calls(),
            vec![
                Call::Update(token.clone(), SkuId::from(7), patch),
                Call::List(token),
            ]
        );
    }

    #[test]
    fn test_save_failure_skips_reload() {
        let (controller, _) = logged_in(vec![record(7, "A")]);
        controller.api().fail_next(AdminClientError::Status {
            status: 400,
            text: "Bad Request".to_string(),
        });

        let rows = block_on(controller.save(&SkuId::from(7), &SkuPatch::new()));

        assert_eq!(rows, None);
        assert_eq!(alerts(&controller), vec![SAVE_ERROR]);
        assert_eq!(controller.api().calls().len(), 1);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (controller, token) = logged_in(vec![]);

        controller.dialogs().answer.set(false);
        assert_eq!(block_on(controller.delete(&SkuId::from(3))), None);
        assert!(controller.api().calls().is_empty());

        controller.dialogs().answer.set(true);
        assert_eq!(block_on(controller.delete(&SkuId::from(3))), Some(vec![]));
        assert_eq!(
            controller.api().calls(),
            vec![Call::Delete(token.clone(), SkuId::from(3)), Call::List(token)]
        );
        assert_eq!(controller.dialogs().confirms.get(), 2);
    }

    #[test]
    fn test_delete_network_failure() {
        let (controller, _) = logged_in(vec![]);
        controller.dialogs().answer.set(true);
        controller
            .api()
            .fail_next(AdminClientError::Network("timeout".to_string()));

        assert_eq!(block_on(controller.delete(&SkuId::from(3))), None);
        assert_eq!(alerts(&controller), vec![MUTATION_NETWORK_ERROR]);
    }

    #[test]
    fn test_mutations_use_short_network_alert() {
        let (controller, _) = logged_in(vec![]);
        let timeout = || AdminClientError::Network("timeout".to_string());

        controller.api().fail_next(timeout());
        assert_eq!(block_on(controller.save(&SkuId::from(3), &SkuPatch::new())), None);

        controller.api().fail_next(timeout());
        assert_eq!(
            block_on(controller.add(&SkuDraft::new("A-1", "1", "1"))),
            AddOutcome::Failed
        );

        controller.api().fail_next(timeout());
        assert_eq!(block_on(controller.load()), None);

        assert_eq!(
            alerts(&controller),
            vec![MUTATION_NETWORK_ERROR, MUTATION_NETWORK_ERROR, NETWORK_ERROR]
        );
    }

    #[test]
    fn test_add_rejects_zero_without_request() {
        let (controller, _) = logged_in(vec![]);

        let outcome = block_on(controller.add(&SkuDraft::new("A-1", "0", "10")));

        assert_eq!(outcome, AddOutcome::Invalid(DraftError::MissingMargin));
        assert_eq!(alerts(&controller), vec![FIELDS_REQUIRED]);
        assert!(controller.api().calls().is_empty());
    }

    #[test]
    fn test_add_creates_then_reloads() {
        let (controller, token) = logged_in(vec![record(1, "A-1")]);

        let outcome = block_on(controller.add(&SkuDraft::new("A-1", "12.5", "40")));

        assert_eq!(outcome, AddOutcome::Added(Some(vec![record(1, "A-1")])));
        let calls = controller.api().calls();
        match &calls[0] {
            Call::Create(sent_token, body) => {
                assert_eq!(sent_token, &token);
                assert_eq!(
                    serde_json::to_value(body).unwrap(),
                    json!({"sku": "A-1", "plan_margin": 12.5, "plan_orders": 40})
                );
            }
            other => panic!("Wrong call: {:?}", other),
        }
        assert_eq!(calls[1], Call::List(token));
    }

    #[test]
    fn test_add_failure_alerts() {
        let (controller, _) = logged_in(vec![]);
        controller.api().fail_next(AdminClientError::Status {
            status: 422,
            text: "Unprocessable Entity".to_string(),
        });

        let outcome = block_on(controller.add(&SkuDraft::new("A-1", "1", "1")));

        assert_eq!(outcome, AddOutcome::Failed);
        assert_eq!(alerts(&controller), vec![ADD_ERROR]);
    }

    #[test]
    fn test_protected_calls_without_token_send_nothing() {
        let controller = controller(FakeApi::default(), MemoryTokenStore::new());

        assert_eq!(block_on(controller.load()), None);
        assert_eq!(alerts(&controller), vec![LOAD_ERROR]);
        assert!(controller.api().calls().is_empty());
    }

    #[test]
    fn test_logout_clears_token() {
        let (controller, _) = logged_in(vec![]);

        assert_eq!(controller.logout(), View::LoggedOut);
        assert!(controller.session().token().is_none());
        assert_eq!(controller.initial_view(NOW_MS), View::LoggedOut);
    }
}
