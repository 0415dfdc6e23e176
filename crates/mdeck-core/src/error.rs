//! Application error types with rich context

use thiserror::Error;

/// Fixed operator-facing message for any failed diagnostic request.
///
/// The underlying cause (transport, timeout, backend status) is logged but
/// never surfaced to the operator; a failed submission is terminal and the
/// operator must resubmit.
pub const QUERY_FAILED_NOTICE: &str =
    "Failed to get a response from the assistant. Check that the backend is running.";

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Backend Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Backend returned status {status}")]
    Backend { status: u16 },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Invalid backend address: {message}")]
    BackendAddress { message: String },

    #[error("Source has no linked document")]
    NoDocument,

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn backend(status: u16) -> Self {
        Self::Backend { status }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }

    pub fn backend_address(message: impl Into<String>) -> Self {
        Self::BackendAddress {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error.
    ///
    /// Backend-facing failures are recoverable: they surface as the error
    /// lifecycle state and the operator can resubmit. Infrastructure
    /// failures (terminal, channel) are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Backend { .. }
                | Error::Transport { .. }
                | Error::Timeout { .. }
                | Error::Json(_)
                | Error::NoDocument
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::backend(503);
        assert_eq!(err.to_string(), "Backend returned status 503");

        let err = Error::timeout(30);
        assert_eq!(err.to_string(), "Request timed out after 30s");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_backend_errors_are_recoverable() {
        assert!(Error::backend(500).is_recoverable());
        assert!(Error::transport("connection refused").is_recoverable());
        assert!(Error::timeout(30).is_recoverable());
        assert!(Error::NoDocument.is_recoverable());
    }

    #[test]
    fn test_infrastructure_errors_are_not_recoverable() {
        assert!(!Error::terminal("broken pipe").is_recoverable());
        assert!(!Error::ChannelClosed.is_recoverable());
        assert!(!Error::config("bad toml").is_recoverable());
    }
}
