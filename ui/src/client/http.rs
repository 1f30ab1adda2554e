//! HTTP Backend Client
//!
//! Talks JSON to the SKU backend with `fetch` through gloo-net. Endpoints are
//! resolved against [`UiConfig::api_base`], so by default they are relative to
//! the page origin.

use gloo_net::http::{Request, RequestBuilder, Response};
use sku_admin_shared::{LoginRequest, LoginResponse, NewSku, SkuId, SkuPatch, SkuRecord};

use super::{AdminApi, AdminClientError};
use crate::config::UiConfig;

/// Backend client used in the browser
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: UiConfig,
}

impl HttpClient {
    pub fn new(config: UiConfig) -> Self {
        Self { config }
    }

    fn login_url(&self) -> String {
        self.config.endpoint("/login")
    }

    fn collection_url(&self) -> String {
        self.config.endpoint("/sku")
    }

    fn item_url(&self, id: &SkuId) -> String {
        let id = id.to_string();
        self.config
            .endpoint(&format!("/sku/{}", urlencoding::encode(&id)))
    }

    /// Send a request and turn non-2xx statuses into errors
    async fn dispatch(request: Request) -> Result<Response, AdminClientError> {
        let method = request.method();
        let url = request.url();
        tracing::debug!(%method, %url, "Sending request");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "Request failed");
            AdminClientError::Network(e.to_string())
        })?;

        if !response.ok() {
            tracing::warn!(%method, %url, status = response.status(), "Backend rejected request");
            return Err(AdminClientError::Status {
                status: response.status(),
                text: response.status_text(),
            });
        }

        Ok(response)
    }

    fn with_bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {}", token))
    }

    fn json_body<T: serde::Serialize>(
        builder: RequestBuilder,
        body: &T,
    ) -> Result<Request, AdminClientError> {
        builder
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| AdminClientError::Encode(e.to_string()))
    }

    fn no_body(builder: RequestBuilder) -> Result<Request, AdminClientError> {
        builder
            .build()
            .map_err(|e| AdminClientError::Encode(e.to_string()))
    }

    pub(crate) fn login_request(&self, request: &LoginRequest) -> Result<Request, AdminClientError> {
        Self::json_body(Request::post(&self.login_url()), request)
    }

    pub(crate) fn list_request(&self, token: &str) -> Result<Request, AdminClientError> {
        Self::no_body(Self::with_bearer(Request::get(&self.collection_url()), token))
    }

    pub(crate) fn create_request(&self, token: &str, sku: &NewSku) -> Result<Request, AdminClientError> {
        Self::json_body(Self::with_bearer(Request::post(&self.collection_url()), token), sku)
    }

    pub(crate) fn update_request(
        &self,
        token: &str,
        id: &SkuId,
        patch: &SkuPatch,
    ) -> Result<Request, AdminClientError> {
        Self::json_body(Self::with_bearer(Request::put(&self.item_url(id)), token), patch)
    }

    pub(crate) fn delete_request(&self, token: &str, id: &SkuId) -> Result<Request, AdminClientError> {
        Self::no_body(Self::with_bearer(Request::delete(&self.item_url(id)), token))
    }
}

#[async_trait::async_trait(?Send)]
impl AdminApi for HttpClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AdminClientError> {
        let response = Self::dispatch(self.login_request(request)?).await?;

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| AdminClientError::InvalidResponse(e.to_string()))
    }

    async fn list_skus(&self, token: &str) -> Result<Vec<SkuRecord>, AdminClientError> {
        let response = Self::dispatch(self.list_request(token)?).await?;

        response
            .json::<Vec<SkuRecord>>()
            .await
            .map_err(|e| AdminClientError::InvalidResponse(e.to_string()))
    }

    async fn create_sku(&self, token: &str, sku: &NewSku) -> Result<(), AdminClientError> {
        Self::dispatch(self.create_request(token, sku)?).await?;
        Ok(())
    }

    async fn update_sku(
        &self,
        token: &str,
        id: &SkuId,
        patch: &SkuPatch,
    ) -> Result<(), AdminClientError> {
        Self::dispatch(self.update_request(token, id, patch)?).await?;
        Ok(())
    }

    async fn delete_sku(&self, token: &str, id: &SkuId) -> Result<(), AdminClientError> {
        Self::dispatch(self.delete_request(token, id)?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_relative_to_origin() {
        let client = HttpClient::new(UiConfig::default());

        assert_eq!(client.login_url(), "/login");
        assert_eq!(client.collection_url(), "/sku");
        assert_eq!(client.item_url(&SkuId::from(7)), "/sku/7");
    }

    #[test]
    fn test_item_url_encodes_text_ids() {
        let client = HttpClient::new(UiConfig::new("http://localhost:5000/"));

        assert_eq!(
            client.item_url(&SkuId::from("A/100 x")),
            "http://localhost:5000/sku/A%2F100%20x"
        );
    }

    /// Request construction goes through `web_sys::Request`, so these only
    /// run in a browser
    #[cfg(target_arch = "wasm32")]
    mod browser {
        use sku_admin_shared::SkuField;
        use wasm_bindgen_test::*;

        use super::*;

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        fn test_update_request_carries_bearer_and_json() {
            let client = HttpClient::new(UiConfig::default());
            let patch = SkuPatch::new().with(SkuField::PlanMargin, 15);

            let request = client.update_request("T", &SkuId::from(7), &patch).unwrap();
            let headers = request.headers();

            assert_eq!(request.method().to_string(), "PUT");
            assert!(request.url().ends_with("/sku/7"));
            assert_eq!(headers.get("Authorization").as_deref(), Some("Bearer T"));
            assert_eq!(headers.get("Content-Type").as_deref(), Some("application/json"));
        }

        #[wasm_bindgen_test]
        fn test_collection_requests_carry_bearer() {
            let client = HttpClient::new(UiConfig::default());

            let list = client.list_request("T").unwrap();
            assert_eq!(list.method().to_string(), "GET");
            assert!(list.url().ends_with("/sku"));
            assert_eq!(list.headers().get("Authorization").as_deref(), Some("Bearer T"));

            let delete = client.delete_request("T", &SkuId::from(3)).unwrap();
            assert_eq!(delete.method().to_string(), "DELETE");
            assert_eq!(delete.headers().get("Authorization").as_deref(), Some("Bearer T"));
        }

        #[wasm_bindgen_test]
        fn test_login_request_has_no_bearer() {
            let client = HttpClient::new(UiConfig::default());

            let request = client.login_request(&LoginRequest::new("a", "b")).unwrap();

            assert_eq!(request.method().to_string(), "POST");
            assert!(request.url().ends_with("/login"));
            assert!(request.headers().get("Authorization").is_none());
        }
    }
}
