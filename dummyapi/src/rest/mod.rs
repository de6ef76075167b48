pub mod endpoints;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{DummyApiError, Result};

/// Header carrying the application key.
pub const APP_ID_HEADER: &str = "app-id";

/// Undecoded response of a successful request.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// HTTP client wrapper for the dummyapi REST API.
#[derive(Debug, Clone)]
pub struct DummyApiHttpClient {
    client: Client,
    base_url: String,
    app_id: String,
}

impl DummyApiHttpClient {
    pub fn new(base_url: &str, app_id: &str) -> Self {
        Self::with_client(Client::new(), base_url, app_id)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, ...).
    pub fn with_client(client: Client, base_url: &str, app_id: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: app_id.to_string(),
        }
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let resp = self.send(path, query).await?;
        resp.json::<T>().await.map_err(DummyApiError::Request)
    }

    /// GET a resource and return its body as text.
    pub async fn get_raw(&self, path: &str, query: &[(&str, String)]) -> Result<RawResponse> {
        let resp = self.send(path, query).await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok(RawResponse { status, body })
    }

    async fn send(&self, path: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .header(APP_ID_HEADER, &self.app_id)
            .query(query)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(DummyApiError::Http {
                status,
                message: body,
            });
        }

        Ok(resp)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
