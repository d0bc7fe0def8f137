//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use cdn_orchestrator_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Shorthand input does not match its expected shape
    #[error("Invalid {field} format: {detail}")]
    InvalidFormat { field: String, detail: String },

    /// A required value could not be located in the input
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Failure returned by the CDN control plane, passed through unchanged
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    pub(crate) fn invalid_format(field: &str, detail: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.to_string(),
            detail: detail.into(),
        }
    }

    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidFormat { .. } | Self::MissingRequiredField(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::SerializationError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
