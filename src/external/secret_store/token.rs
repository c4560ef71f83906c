use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use gcp_auth::TokenProvider;
use tokio::sync::{Mutex, RwLock};

use crate::config::{SecretStoreConfig, TokenSourceKind};
use crate::error::{AppError, AppResult};

/// OAuth scope covering the Secret Manager API
const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Assumed lifetime of a freshly issued access token
const TOKEN_LIFETIME: Duration = Duration::from_secs(3500);

/// Tokens closer than this to expiry are refreshed
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Bearer token provider for the secret manager API
#[derive(Clone)]
pub enum TokenSource {
    /// Configured token sent as-is; overrides credential discovery
    Static(String),
    ApplicationDefault(Arc<DefaultCredentials>),
}

impl TokenSource {
    pub fn from_config(config: &SecretStoreConfig) -> Self {
        match config.token_source {
            TokenSourceKind::Static => TokenSource::Static(config.access_token.clone()),
            TokenSourceKind::ApplicationDefault => {
                TokenSource::ApplicationDefault(Arc::new(DefaultCredentials::new()))
            }
        }
    }

    /// Current bearer token; `secret` is only used for error context
    pub async fn token(&self, secret: &str) -> AppResult<String> {
        match self {
            TokenSource::Static(token) => Ok(token.clone()),
            TokenSource::ApplicationDefault(credentials) => credentials.token(secret).await,
        }
    }
}

impl fmt::Debug for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Static(_) => f.write_str("Static(<redacted>)"),
            TokenSource::ApplicationDefault(_) => f.write_str("ApplicationDefault"),
        }
    }
}

struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Application default credentials with a shared, cached access token.
///
/// The provider is discovered on first use (`GOOGLE_APPLICATION_CREDENTIALS`,
/// gcloud, or the metadata server) and kept for the life of the process.
pub struct DefaultCredentials {
    provider: Mutex<Option<Arc<dyn TokenProvider>>>,
    cached: RwLock<Option<CachedToken>>,
    lifetime: Duration,
}

impl DefaultCredentials {
    pub fn new() -> Self {
        Self {
            provider: Mutex::new(None),
            cached: RwLock::new(None),
            lifetime: TOKEN_LIFETIME,
        }
    }

    /// Use an already built provider instead of discovering one
    pub fn with_provider(provider: Arc<dyn TokenProvider>, lifetime: Duration) -> Self {
        Self {
            provider: Mutex::new(Some(provider)),
            cached: RwLock::new(None),
            lifetime,
        }
    }

    async fn cached_token(&self) -> Option<String> {
        let cached = self.cached.read().await;
        cached
            .as_ref()
            .filter(|c| c.expires_at > Instant::now() + REFRESH_MARGIN)
            .map(|c| c.token.clone())
    }

    /// Cached token, or a new one from the provider
    ///
    /// Concurrent callers that miss the cache wait on one provider request.
    pub async fn token(&self, secret: &str) -> AppResult<String> {
        if let Some(token) = self.cached_token().await {
            return Ok(token);
        }

        let mut provider_guard = self.provider.lock().await;
        if let Some(token) = self.cached_token().await {
            return Ok(token);
        }

        let provider = match provider_guard.as_ref() {
            Some(provider) => Arc::clone(provider),
            None => {
                tracing::debug!("Discovering application default credentials");
                let provider = gcp_auth::provider().await.map_err(|e| {
                    tracing::error!(error = %e, "No usable application default credentials");
                    AppError::store_unavailable(
                        secret,
                        format!("credential discovery failed: {}", e),
                    )
                })?;
                *provider_guard = Some(Arc::clone(&provider));
                provider
            }
        };

        let token = provider.token(&[CLOUD_PLATFORM_SCOPE]).await.map_err(|e| {
            tracing::error!(error = %e, "Access token request failed");
            AppError::store_unavailable(secret, format!("access token request failed: {}", e))
        })?;
        let token = token.as_str().to_string();

        *self.cached.write().await = Some(CachedToken {
            token: token.clone(),
            expires_at: Instant::now() + self.lifetime,
        });
        tracing::debug!("Access token refreshed");

        Ok(token)
    }
}

impl Default for DefaultCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DefaultCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultCredentials")
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}
