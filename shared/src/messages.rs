//! API message types for communication between the admin panel and backend
//!
//! Record payloads live in [`crate::sku`]; this module holds the
//! authentication exchange.

use serde::{Deserialize, Serialize};

/// Body of `POST /login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful `POST /login` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Raw session token (a JWT)
    pub token: String,
}
