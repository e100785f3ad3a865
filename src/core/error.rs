/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Main client error type
///
/// Every pipeline stage maps its failures onto one of these variants; nothing
/// is retried or swallowed, a failed stage aborts the whole call.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Missing or invalid endpoint/secret; raised before any network activity
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network failure or non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not valid JSON, or a request failed to serialize
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response parsed but lacks the structure the action requires
    #[error("Protocol error: {0}")]
    Protocol(String),
}

// Helper functions for common error scenarios
impl ClientError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        ClientError::Configuration(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        ClientError::Transport(msg.into())
    }

    pub fn protocol(msg: impl Into<String>) -> Self {
        ClientError::Protocol(msg.into())
    }
}
