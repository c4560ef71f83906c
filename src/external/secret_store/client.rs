use async_trait::async_trait;

use super::{SecretBackend, SecretPayload, SecretStore};
use crate::error::{AppError, AppResult};

/// CRC32C (Castagnoli) of `data` in the store's i64 representation
pub fn crc32c_checksum(data: &[u8]) -> i64 {
    i64::from(crc32c::crc32c(data))
}

/// Check `payload` against its store checksum and decode it as UTF-8.
///
/// A payload without a checksum cannot be verified and is rejected the same
/// way as a mismatch.
pub fn verify_payload(name: &str, payload: SecretPayload) -> AppResult<String> {
    let actual = crc32c_checksum(&payload.data);
    if payload.data_crc32c != Some(actual) {
        tracing::warn!(
            secret = %name,
            expected = ?payload.data_crc32c,
            actual,
            "Secret payload failed integrity check"
        );
        return Err(AppError::Integrity {
            name: name.to_string(),
            expected: payload.data_crc32c,
            actual,
        });
    }

    String::from_utf8(payload.data)
        .map_err(|e| AppError::decode(name, format!("secret payload is not UTF-8: {}", e)))
}

/// [`SecretStore`] over any [`SecretBackend`], adding integrity verification
pub struct SecretStoreClient<B> {
    backend: B,
}

impl<B: SecretBackend> SecretStoreClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[async_trait]
impl<B: SecretBackend> SecretStore for SecretStoreClient<B> {
    async fn access_secret(&self, name: &str) -> AppResult<String> {
        let payload = self.backend.fetch_payload(name).await?;
        tracing::debug!(
            secret = %name,
            backend = self.backend.name(),
            bytes = payload.data.len(),
            "Secret payload received"
        );
        verify_payload(name, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend(SecretPayload);

    #[async_trait]
    impl SecretBackend for FixedBackend {
        async fn fetch_payload(&self, _name: &str) -> AppResult<SecretPayload> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn payload(data: &[u8], checksum_of: &[u8]) -> SecretPayload {
        SecretPayload {
            data: data.to_vec(),
            data_crc32c: Some(crc32c_checksum(checksum_of)),
        }
    }

    #[test]
    fn test_crc32c_check_value() {
        // Standard CRC-32C check value
        assert_eq!(crc32c_checksum(b"123456789"), 0xE306_9283);
        assert_eq!(crc32c_checksum(b""), 0);
    }

    #[tokio::test]
    async fn test_access_secret_verified() {
        let client = SecretStoreClient::new(FixedBackend(payload(b"abc", b"abc")));
        assert_eq!(client.access_secret("projects/p/secrets/s").await.unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_access_secret_checksum_mismatch() {
        let client = SecretStoreClient::new(FixedBackend(payload(b"abc", b"abz")));
        let err = client.access_secret("projects/p/secrets/s").await.unwrap_err();
        match err {
            AppError::Integrity {
                name,
                expected,
                actual,
            } => {
                assert_eq!(name, "projects/p/secrets/s");
                assert_eq!(expected, Some(crc32c_checksum(b"abz")));
                assert_eq!(actual, crc32c_checksum(b"abc"));
            }
            other => panic!("expected Integrity, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_checksum_rejected() {
        let err = verify_payload(
            "s",
            SecretPayload {
                data: b"abc".to_vec(),
                data_crc32c: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Integrity { expected: None, .. }));
    }

    #[test]
    fn test_non_utf8_payload() {
        let data = vec![0xff, 0xfe, 0xfd];
        let err = verify_payload(
            "s",
            SecretPayload {
                data_crc32c: Some(crc32c_checksum(&data)),
                data,
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));
    }
}
