//! # Error Types
//!
//! Structured error types for flow_core. Every fallible operation in the crate
//! returns [`FlowResult`], and the GUI turns a [`FlowError`] into banner text
//! via [`FlowError::user_message`].
//!
//! ## Example
//!
//! ```rust
//! use flow_core::errors::{FlowError, FlowResult};
//!
//! fn require_content(content: &str) -> FlowResult<()> {
//!     if content.is_empty() {
//!         return Err(FlowError::invalid_input(
//!             "content",
//!             "submission requires text, code, or a file",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for flow_core operations
pub type FlowResult<T> = Result<T, FlowError>;

/// Fallback banner text when a failure carries no server-provided detail.
pub const GENERIC_SUBMISSION_ERROR: &str = "An error occurred while processing your input";

/// Structured error type for session, client, media, and export operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FlowError {
    /// An input value is invalid (empty content, malformed URL, etc.)
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// The backend answered non-200 with a structured detail message
    #[error("{detail}")]
    Backend { detail: String },

    /// The request never produced a usable response (DNS, refused, timeout)
    #[error("Network error: {reason}")]
    Network { reason: String },

    /// The backend answered 200 but the body did not match the result shape
    #[error("Invalid backend response: {reason}")]
    InvalidResponse { reason: String },

    /// Microphone unavailable or permission denied
    #[error("Microphone unavailable: {reason}")]
    AudioDevice { reason: String },

    /// Capture stream failed after the device was opened
    #[error("Audio stream error: {reason}")]
    AudioStream { reason: String },

    /// A dropped or picked file is not an accepted image/audio/video type
    #[error("Unsupported file type: {name}")]
    UnsupportedFile { name: String },

    /// File I/O error (reading an upload, writing a download)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Configuration error (startup-time)
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FlowError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FlowError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a Backend error carrying the server's `detail` field
    pub fn backend(detail: impl Into<String>) -> Self {
        FlowError::Backend {
            detail: detail.into(),
        }
    }

    /// Create a Network error
    pub fn network(reason: impl Into<String>) -> Self {
        FlowError::Network {
            reason: reason.into(),
        }
    }

    /// Create an AudioDevice error
    pub fn audio_device(reason: impl Into<String>) -> Self {
        FlowError::AudioDevice {
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedFile error
    pub fn unsupported_file(name: impl Into<String>) -> Self {
        FlowError::UnsupportedFile { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FlowError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(reason: impl Into<String>) -> Self {
        FlowError::Config {
            reason: reason.into(),
        }
    }

    /// Banner text for the GUI: the server's own detail when it provided one,
    /// a generic fallback for transport/parse failures, and the Display form
    /// for local errors (microphone, files) whose messages are actionable.
    pub fn user_message(&self) -> String {
        match self {
            FlowError::Backend { detail } => detail.clone(),
            FlowError::Network { .. } | FlowError::InvalidResponse { .. } => {
                GENERIC_SUBMISSION_ERROR.to_string()
            }
            other => other.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FlowError::InvalidInput { .. } => "INVALID_INPUT",
            FlowError::Backend { .. } => "BACKEND",
            FlowError::Network { .. } => "NETWORK",
            FlowError::InvalidResponse { .. } => "INVALID_RESPONSE",
            FlowError::AudioDevice { .. } => "AUDIO_DEVICE",
            FlowError::AudioStream { .. } => "AUDIO_STREAM",
            FlowError::UnsupportedFile { .. } => "UNSUPPORTED_FILE",
            FlowError::FileError { .. } => "FILE_ERROR",
            FlowError::Config { .. } => "CONFIG",
            FlowError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<cpal::DevicesError> for FlowError {
    fn from(err: cpal::DevicesError) -> Self {
        FlowError::audio_device(err.to_string())
    }
}

impl From<cpal::DefaultStreamConfigError> for FlowError {
    fn from(err: cpal::DefaultStreamConfigError) -> Self {
        FlowError::audio_device(err.to_string())
    }
}

impl From<cpal::BuildStreamError> for FlowError {
    fn from(err: cpal::BuildStreamError) -> Self {
        FlowError::AudioStream {
            reason: err.to_string(),
        }
    }
}

impl From<cpal::PlayStreamError> for FlowError {
    fn from(err: cpal::PlayStreamError) -> Self {
        FlowError::AudioStream {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FlowError::backend("rate limited");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: FlowError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_backend_detail_surfaces_verbatim() {
        let error = FlowError::backend("rate limited");
        assert_eq!(error.user_message(), "rate limited");
        assert_eq!(error.to_string(), "rate limited");
    }

    #[test]
    fn test_network_error_falls_back_to_generic_message() {
        let error = FlowError::network("connection refused");
        assert_eq!(error.user_message(), GENERIC_SUBMISSION_ERROR);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FlowError::backend("x").error_code(), "BACKEND");
        assert_eq!(
            FlowError::audio_device("no input device").error_code(),
            "AUDIO_DEVICE"
        );
    }
}
