//! Shared error type across appinfo crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Secret requested but not configured.
    SecretNotConfigured,
    /// Invalid startup configuration.
    BadConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            // Kept as the human-readable string clients of `/secret` already match on.
            ClientCode::SecretNotConfigured => "Secret not configured",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AppInfoError>;

/// Unified error type used by core and service.
#[derive(Debug, Error)]
pub enum AppInfoError {
    #[error("The SECRET_MESSAGE variable is not configured")]
    SecretNotConfigured,
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppInfoError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            AppInfoError::SecretNotConfigured => ClientCode::SecretNotConfigured,
            AppInfoError::InvalidPort(_) => ClientCode::BadConfig,
            AppInfoError::Internal(_) => ClientCode::Internal,
        }
    }
}
