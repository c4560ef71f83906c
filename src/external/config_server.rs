//! Remote configuration server client.

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::ConfigurationDocument;

/// JSON envelope returned by the configuration server
#[derive(Debug, Deserialize)]
struct ConfigServerResponse {
    #[serde(rename = "Response")]
    response: ConfigurationDocument,
}

/// Fetches the per-domain configuration document.
///
/// A single attempt is made per call; retries belong to the caller. The
/// returned document is not validated here, see
/// [`ConfigurationDocument::validate`].
#[derive(Debug, Clone)]
pub struct ConfigServerClient {
    http: reqwest::Client,
}

impl ConfigServerClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// GET `url` and decode `{ "Response": <document> }`
    ///
    /// # Errors
    /// - `Transport` when the request fails or the status is not 2xx
    /// - `Decode` when the body is not the expected JSON envelope
    pub async fn load_configuration(&self, url: &str) -> AppResult<ConfigurationDocument> {
        tracing::debug!(url = %url, "Fetching configuration document");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::transport(url, e))?
            .error_for_status()
            .map_err(|e| AppError::transport(url, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::transport(url, e))?;

        let envelope: ConfigServerResponse = serde_json::from_slice(&body)
            .map_err(|e| AppError::decode(url, format!("invalid JSON envelope: {}", e)))?;

        let document = envelope.response;
        tracing::info!(
            url = %url,
            domains = document.domain_and_buckets.len(),
            domain_settings = document.domain_settings.len(),
            "Configuration document loaded"
        );

        Ok(document)
    }
}
