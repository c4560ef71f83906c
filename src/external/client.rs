use std::time::Duration;

use crate::config::HttpClientConfig;
use crate::error::{AppError, AppResult};

/// Build the HTTP client shared by the configuration server and secret store
///
/// One client is created at boot and cloned into every consumer, so
/// connections are pooled across both collaborators.
///
/// # Features
/// - **Timeouts**: whole-request and connect timeouts from settings; these are
///   the only deadlines applied to external calls
/// - **Compression**: gzip responses are accepted
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
///
/// # Example
/// ```ignore
/// let http = build_http_client(&settings.http)?;
/// let document = ConfigServerClient::new(http.clone())
///     .load_configuration(&settings.config_server.url)
///     .await?;
/// ```
pub fn build_http_client(config: &HttpClientConfig) -> AppResult<reqwest::Client> {
    let user_agent = config
        .user_agent
        .clone()
        .unwrap_or_else(|| format!("tenant-config/{}", crate::pkg_version()));

    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(config.request_timeout))
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .gzip(true)
        .user_agent(user_agent)
        .build()
        .map_err(|e| AppError::invalid_configuration(format!("failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        assert!(build_http_client(&HttpClientConfig::default()).is_ok());
    }

    #[test]
    fn test_client_with_custom_user_agent() {
        let config = HttpClientConfig {
            user_agent: Some("tenant-config-test/1.0".to_string()),
            ..Default::default()
        };
        assert!(build_http_client(&config).is_ok());
    }
}
