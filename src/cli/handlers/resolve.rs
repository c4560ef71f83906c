//! Resolve command handler
//!
//! Resolves one secret end to end. The value itself is never printed.

use crate::AppState;
use crate::error::AppResult;

/// Handler for the resolve command
pub struct ResolveCommandHandler {
    state: AppState,
}

impl ResolveCommandHandler {
    /// Create a new resolve command handler
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Resolve `key` for `domain` and describe the result
    ///
    /// # Errors
    /// Any error from [`SecretResolver::get_secret`](crate::services::SecretResolver::get_secret)
    pub async fn report(&self, domain: &str, key: &str) -> AppResult<String> {
        let value = self.state.secrets.get_secret(domain, key).await?;
        Ok(format!(
            "✓ Secret '{}' for {} resolved ({} bytes)",
            key,
            domain,
            value.len()
        ))
    }

    /// Resolve and print the summary
    pub async fn execute(&self, domain: &str, key: &str) -> AppResult<()> {
        println!("{}", self.report(domain, key).await?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::test_support::state;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_resolve_reports_length_only() {
        let handler = ResolveCommandHandler::new(state());
        let report = handler.report("shop.example", "api-key").await.unwrap();

        let value = "secret-of:projects/42/secrets/shop-api-key/versions/latest";
        assert!(report.contains(&format!("({} bytes)", value.len())));
        assert!(!report.contains(value));
    }

    #[tokio::test]
    async fn test_resolve_unconfigured_domain() {
        let handler = ResolveCommandHandler::new(state());
        let err = handler.report("blog.example", "api-key").await.unwrap_err();
        assert!(matches!(err, AppError::UnconfiguredDomain { .. }));
    }

    #[tokio::test]
    async fn test_resolve_store_failure() {
        let handler = ResolveCommandHandler::new(state());
        let err = handler.report("shop.example", "missing").await.unwrap_err();
        assert!(matches!(err, AppError::StoreUnavailable { .. }));
    }
}
