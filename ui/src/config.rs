//! Runtime configuration
//!
//! The host page can point the panel at a backend on another origin and
//! rename the storage key through `<meta>` tags:
//!
//! ```html
//! <meta name="sku-admin-api-base" content="http://localhost:5000">
//! <meta name="sku-admin-token-key" content="token">
//! ```
//!
//! Without them every endpoint is resolved relative to the page origin.

const API_BASE_META: &str = "sku-admin-api-base";
const TOKEN_KEY_META: &str = "sku-admin-token-key";

/// Local storage key holding the raw session token
pub const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Prefix for every endpoint path; empty means same origin
    pub api_base: String,

    /// Local storage key for the session token
    pub token_key: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}

impl UiConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.token_key = key.into();
        self
    }

    /// Read overrides from the host page's `<meta>` tags
    pub fn from_document() -> Self {
        let mut config = match read_meta(API_BASE_META) {
            Some(base) => Self::new(&base),
            None => Self::default(),
        };
        if let Some(key) = read_meta(TOKEN_KEY_META).filter(|key| !key.is_empty()) {
            config.token_key = key;
        }

        tracing::debug!(api_base = %config.api_base, token_key = %config.token_key, "Loaded UI config");
        config
    }

    /// Full URL (or origin-relative path) for an endpoint
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?;
    element.get_attribute("content")
}
