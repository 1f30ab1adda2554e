//! Backend Client Abstraction Layer
//!
//! This module provides the interface the admin panel uses to talk to the
//! SKU backend. [`HttpClient`] is the browser implementation; tests supply
//! their own [`AdminApi`] so the controller can run without a network.
//!
//! Every protected call takes the raw session token explicitly. Tokens are
//! read from the session right before each call and never cached here.

mod http;

pub use http::HttpClient;

use async_trait::async_trait;
use sku_admin_shared::{LoginRequest, LoginResponse, NewSku, SkuId, SkuPatch, SkuRecord};

/// Error types for backend client operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminClientError {
    #[error("No session token stored")]
    NotAuthenticated,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {text}")]
    Status { status: u16, text: String },

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl AdminClientError {
    /// The request never produced a response
    pub fn is_transport(&self) -> bool {
        matches!(self, AdminClientError::Network(_))
    }
}

/// The five REST calls behind the panel
#[async_trait(?Send)]
pub trait AdminApi {
    /// `POST /login`
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AdminClientError>;

    /// `GET /sku`
    async fn list_skus(&self, token: &str) -> Result<Vec<SkuRecord>, AdminClientError>;

    /// `POST /sku`
    async fn create_sku(&self, token: &str, sku: &NewSku) -> Result<(), AdminClientError>;

    /// `PUT /sku/{id}`
    async fn update_sku(
        &self,
        token: &str,
        id: &SkuId,
        patch: &SkuPatch,
    ) -> Result<(), AdminClientError>;

    /// `DELETE /sku/{id}`
    async fn delete_sku(&self, token: &str, id: &SkuId) -> Result<(), AdminClientError>;
}
