//! Domain-scoped secret resolution.
//!
//! Maps `(domain, logical key)` to a secret value through the domain's
//! secret-locator template, memoizing successful lookups for the process
//! lifetime.

use std::sync::Arc;

use crate::cache::MemoryCache;
use crate::error::{AppError, AppResult};
use crate::external::SecretStore;
use crate::models::ConfigurationDocument;

/// Cache entries are keyed by the `(domain, logical key)` pair itself; the
/// joined `domain-key` form is ambiguous when either part contains `-`.
type SecretKey = (String, String);

/// Secret resolver backed by a [`SecretStore`] and a get-or-compute cache.
///
/// Cloning is cheap: the document, store and cache are shared behind `Arc`.
#[derive(Clone)]
pub struct SecretResolver {
    document: Arc<ConfigurationDocument>,
    store: Arc<dyn SecretStore>,
    cache: Arc<MemoryCache<SecretKey, String>>,
}

impl SecretResolver {
    pub fn new(document: Arc<ConfigurationDocument>, store: Arc<dyn SecretStore>) -> Self {
        Self {
            document,
            store,
            cache: Arc::new(MemoryCache::new()),
        }
    }

    /// Resolve the secret `logical_key` of `domain`.
    ///
    /// Cached values are returned without an external call. On a miss the
    /// domain's template is expanded and the store is called once, even when
    /// several tasks miss the same key concurrently. Errors are returned
    /// unchanged and never cached.
    ///
    /// # Errors
    /// - `UnconfiguredDomain` when the document has no settings for `domain`
    /// - `InvalidConfiguration` when the template has no `%s` placeholder
    /// - any error of the underlying [`SecretStore`]
    pub async fn get_secret(&self, domain: &str, logical_key: &str) -> AppResult<String> {
        let key = (domain.to_string(), logical_key.to_string());

        self.cache
            .get_or_try_init(key, || async {
                let settings = self.document.domain_settings(domain).ok_or_else(|| {
                    AppError::UnconfiguredDomain {
                        domain: domain.to_string(),
                    }
                })?;

                let locator = settings.secret_locator(logical_key).ok_or_else(|| {
                    AppError::invalid_configuration(format!(
                        "secret template for domain '{}' has no placeholder",
                        domain
                    ))
                })?;

                tracing::debug!(domain, key = logical_key, secret = %locator, "Secret cache miss");
                let value = self.store.access_secret(&locator).await?;
                tracing::debug!("Secret {}-{} cached", domain, logical_key);
                Ok::<_, AppError>(value)
            })
            .await
    }

    /// Number of secrets currently cached
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn document(&self) -> &ConfigurationDocument {
        &self.document
    }
}

impl std::fmt::Debug for SecretResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretResolver")
            .field("domains", &self.document.domain_settings.len())
            .field("cached", &self.cache.len())
            .finish()
    }
}
