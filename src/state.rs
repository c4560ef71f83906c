//! Process-wide application context.
//!
//! Built once at boot and passed explicitly to whatever consumes domain
//! settings or secrets.

use std::sync::Arc;

use crate::config::Settings;
use crate::error::AppResult;
use crate::external::{
    ConfigServerClient, SecretManagerBackend, SecretStore, SecretStoreClient, build_http_client,
};
use crate::models::ConfigurationDocument;
use crate::services::SecretResolver;

/// Loaded configuration document plus the secret resolver built on it.
///
/// Cloning is cheap since the document and resolver are shared behind `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Immutable for the lifetime of the process
    pub document: Arc<ConfigurationDocument>,
    /// Content checksum of `document`, logged at boot
    pub checksum: String,
    pub secrets: SecretResolver,
}

impl AppState {
    /// Wrap an already loaded document and secret store.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` when the document has no domain to
    /// bucket mappings.
    pub fn new(document: ConfigurationDocument, store: Arc<dyn SecretStore>) -> AppResult<Self> {
        document.validate()?;
        let checksum = document.checksum()?;
        let document = Arc::new(document);
        let secrets = SecretResolver::new(document.clone(), store);

        Ok(Self {
            document,
            checksum,
            secrets,
        })
    }

    /// Load the remote document and wire the Secret Manager backend.
    ///
    /// # Example
    /// ```ignore
    /// let settings = ConfigLoader::new()?.load()?;
    /// let state = AppState::bootstrap(&settings).await?;
    /// let key = state.secrets.get_secret("shop.example", "api-key").await?;
    /// ```
    pub async fn bootstrap(settings: &Settings) -> AppResult<Self> {
        let http = build_http_client(&settings.http)?;

        let document = ConfigServerClient::new(http.clone())
            .load_configuration(&settings.config_server.url)
            .await?;

        let backend = SecretManagerBackend::from_config(http, &settings.secret_store);
        let state = Self::new(document, Arc::new(SecretStoreClient::new(backend)))?;

        tracing::info!(
            checksum = %state.checksum,
            domains = state.document.domain_and_buckets.len(),
            "Configuration ready"
        );
        for (domain, bucket) in state.document.domains() {
            tracing::debug!(domain = %domain, bucket = %bucket, "Domain bucket mapping");
        }

        Ok(state)
    }
}
