//! Clients for the services this crate depends on at boot and at runtime:
//! the remote configuration server and the secret store.

pub mod client;
pub mod config_server;
pub mod secret_store;

pub use client::build_http_client;
pub use config_server::ConfigServerClient;
pub use secret_store::{
    SecretBackend, SecretManagerBackend, SecretPayload, SecretStore, SecretStoreClient,
    TokenSource,
};
