use thiserror::Error;

use crate::services::config::ConfigError;

/// Failures of a single listing submission.
///
/// All variants end up as the same generic notification for the user; the
/// detail is only written to the console.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Server rejected submission with status {status}")]
    Status { status: u16 },

    #[error("Failed to decode response body: {message}")]
    Decode { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

/// Result type for client operations
pub type SubmitResult<T> = Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = SubmitError::Status { status: 502 };
        assert_eq!(
            err.to_string(),
            "Server rejected submission with status 502"
        );
    }

    #[test]
    fn test_configuration_error_is_transparent() {
        let err: SubmitError = ConfigError::InvalidValue {
            field: "submit_path".to_string(),
            value: "x".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Configuration error: submit_path = x");
    }
}
