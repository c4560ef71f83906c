use thiserror::Error;

use crate::config::error::ConfigError;

/// Application-wide error type for configuration loading and secret resolution.
///
/// Every fallible operation in the crate returns this type. None of the
/// variants are swallowed internally; boot code decides which ones are fatal.
#[derive(Error, Debug)]
pub enum AppError {
    /// The configuration server or secret store could not be reached,
    /// or answered with a non-success HTTP status
    #[error("Transport error talking to {target}")]
    Transport {
        target: String,
        #[source]
        source: anyhow::Error,
    },

    /// A response body was not valid JSON or did not match the expected shape
    #[error("Failed to decode response from {target}: {message}")]
    Decode { target: String, message: String },

    /// The domain has no `DomainSettings` entry in the loaded document
    #[error("Domain '{domain}' has no settings in the configuration document")]
    UnconfiguredDomain { domain: String },

    /// Secret payload failed CRC32C verification
    #[error("Data corruption detected for secret {name}: expected crc32c {expected:?}, computed {actual}")]
    Integrity {
        name: String,
        expected: Option<i64>,
        actual: i64,
    },

    /// Secret store client could not be built or the access call failed
    #[error("Secret store unavailable for {name}: {message}")]
    StoreUnavailable { name: String, message: String },

    /// Loaded configuration violates a structural invariant
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Local process settings could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    pub fn transport(target: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        AppError::Transport {
            target: target.into(),
            source: source.into(),
        }
    }

    pub fn decode(target: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Decode {
            target: target.into(),
            message: message.into(),
        }
    }

    pub fn store_unavailable(name: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::StoreUnavailable {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        AppError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Whether a caller may reasonably retry the failed operation later.
    ///
    /// Configuration and integrity failures are permanent for the lifetime
    /// of the loaded document.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Transport { .. } | AppError::StoreUnavailable { .. }
        )
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
