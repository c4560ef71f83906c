//! Secret store abstraction.
//!
//! [`SecretStore`] is what the resolver depends on. [`SecretBackend`] is the
//! raw transport to a concrete secret manager; [`SecretStoreClient`] wraps a
//! backend and verifies the store-supplied CRC32C before returning text.

mod client;
mod secret_manager;
mod token;

pub use client::{SecretStoreClient, crc32c_checksum, verify_payload};
pub use secret_manager::SecretManagerBackend;
pub use token::{DefaultCredentials, TokenSource};

use async_trait::async_trait;

use crate::error::AppResult;

/// Raw secret bytes plus the checksum the store computed at write time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretPayload {
    pub data: Vec<u8>,
    /// CRC32C (Castagnoli) of `data`, widened to i64 as the store reports it
    pub data_crc32c: Option<i64>,
}

/// Resolves a fully-qualified secret name to its verified text value
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn access_secret(&self, name: &str) -> AppResult<String>;
}

/// Transport to a concrete secret manager, without integrity checks
#[async_trait]
pub trait SecretBackend: Send + Sync {
    async fn fetch_payload(&self, name: &str) -> AppResult<SecretPayload>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
