//! Service layer.
//!
//! Services combine the loaded configuration document with the external
//! clients to answer runtime lookups.

mod secret_resolver;

pub use secret_resolver::SecretResolver;
