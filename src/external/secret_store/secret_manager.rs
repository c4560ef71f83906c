//! Google Secret Manager backend over the REST API.
//!
//! `GET {endpoint}/{name}:access` returns
//! `{ "name": ..., "payload": { "data": <base64>, "dataCrc32c": <int64> } }`.
//! int64 values arrive as JSON strings, but plain numbers are accepted too.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer};

use super::token::TokenSource;
use super::{SecretBackend, SecretPayload};
use crate::config::SecretStoreConfig;
use crate::error::{AppError, AppResult};

#[derive(Deserialize)]
#[serde(untagged)]
enum Int64Repr {
    Number(i64),
    Text(String),
}

fn optional_int64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Int64Repr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Int64Repr::Number(n)) => Ok(Some(n)),
        Some(Int64Repr::Text(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccessSecretVersionResponse {
    payload: Option<ApiPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPayload {
    #[serde(default)]
    data: String,
    #[serde(default, deserialize_with = "optional_int64")]
    data_crc32c: Option<i64>,
}

/// Secret Manager `versions:access` client
#[derive(Debug, Clone)]
pub struct SecretManagerBackend {
    http: reqwest::Client,
    endpoint: String,
    tokens: TokenSource,
}

impl SecretManagerBackend {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>, tokens: TokenSource) -> Self {
        Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn from_config(http: reqwest::Client, config: &SecretStoreConfig) -> Self {
        Self::new(http, config.endpoint.clone(), TokenSource::from_config(config))
    }

    /// `{endpoint}/{name}:access`, each name segment percent-encoded so a
    /// `?` or `#` in a secret name cannot become a query or fragment
    fn access_url(&self, name: &str) -> AppResult<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            AppError::store_unavailable(name, format!("invalid endpoint '{}': {}", self.endpoint, e))
        })?;
        let resource = format!("{}:access", name.trim_matches('/'));
        url.path_segments_mut()
            .map_err(|_| {
                AppError::store_unavailable(name, format!("endpoint '{}' cannot hold a path", self.endpoint))
            })?
            .pop_if_empty()
            .extend(resource.split('/'));
        Ok(url)
    }
}

#[async_trait]
impl SecretBackend for SecretManagerBackend {
    async fn fetch_payload(&self, name: &str) -> AppResult<SecretPayload> {
        let url = self.access_url(name)?;
        let token = self.tokens.token(name).await?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::store_unavailable(name, format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies carry the API's reason (PERMISSION_DENIED, NOT_FOUND, ...)
            let reason = response.text().await.unwrap_or_default();
            return Err(AppError::store_unavailable(
                name,
                format!("HTTP {}: {}", status, reason.trim()),
            ));
        }

        let body: AccessSecretVersionResponse = response.json().await.map_err(|e| {
            AppError::store_unavailable(name, format!("invalid access response: {}", e))
        })?;

        let payload = body
            .payload
            .ok_or_else(|| AppError::store_unavailable(name, "response has no payload"))?;

        let data = STANDARD.decode(payload.data.as_bytes()).map_err(|e| {
            AppError::store_unavailable(name, format!("payload is not valid base64: {}", e))
        })?;

        Ok(SecretPayload {
            data,
            data_crc32c: payload.data_crc32c,
        })
    }

    fn name(&self) -> &'static str {
        "secret-manager"
    }
}
