use crate::types::ApiError;
use thiserror::Error;

/// Result type alias for Finding API operations
pub type Result<T> = std::result::Result<T, FindingError>;

/// Errors that can occur when calling the Finding API
#[derive(Error, Debug)]
pub enum FindingError {
    /// HTTP request failed before a response was received
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body did not match the expected envelope for its status
    #[error("failed to decode response: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// The provider returned an error envelope
    #[error("API error {}: {}", .0.error_id, .0.message)]
    Api(ApiError),

    /// Malformed fixed endpoint URL; unreachable with a correct constant
    #[error("configuration error: {0}")]
    Config(String),
}

impl FindingError {
    /// Returns true if this is a provider-reported error
    #[must_use]
    pub const fn is_provider_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns the provider error details if this is a provider-reported error
    #[must_use]
    pub const fn provider_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true if the error occurred before a response was decoded
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
