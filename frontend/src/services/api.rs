use async_trait::async_trait;
use gloo::net::http::Request;
use gloo::storage::{LocalStorage, Storage};
use shared::{ApiClient, ApiError, ApiRequest, ApiResponse, Method, Session, Transport};
use web_sys::RequestCredentials;

use crate::config::AppConfig;

/// API client as used by the screens
pub type FinanceApi = ApiClient<BrowserTransport>;

/// `fetch`-backed transport. Always sends cookies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .credentials(RequestCredentials::Include);

        if let Some(token) = request.bearer.as_deref() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let prepared = match request.body.as_ref() {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(format!("Failed to build request: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}

/// Read the stored access token once and build the client every screen shares
pub fn build_api(config: &AppConfig) -> FinanceApi {
    let token = LocalStorage::raw()
        .get_item(&config.token_storage_key)
        .ok()
        .flatten();
    ApiClient::new(Session::new(config.api_base_url.clone(), token), BrowserTransport)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn build_api_reads_stored_token_once() {
        let config = AppConfig::default();
        LocalStorage::raw()
            .set_item(&config.token_storage_key, "stored-token")
            .unwrap();

        let api = build_api(&config);
        LocalStorage::raw().remove_item(&config.token_storage_key).unwrap();

        // Later storage changes don't leak into an existing session
        assert_eq!(api.session().access_token(), Some("stored-token"));
        assert_eq!(api.session().base_url(), "http://localhost:5000");
    }

    #[wasm_bindgen_test]
    fn build_api_without_token_is_anonymous() {
        let config = AppConfig::default();
        LocalStorage::raw().remove_item(&config.token_storage_key).unwrap();

        assert_eq!(build_api(&config).session().access_token(), None);
    }
}
