//! # Backend Client
//!
//! HTTP client for the AI processing backend. Two endpoints:
//!
//! - `POST {base}/api/process` - JSON body for text, code, and audio input
//! - `POST {base}/api/process-image` - multipart form for image input
//!
//! Both return the same [`TransformResult`] shape on success, or a non-200
//! status with a JSON `{ "detail": ... }` body on failure.
//!
//! The base URL is resolved once at startup into a [`BackendConfig`] and
//! threaded through the client explicitly; nothing here reads the
//! environment after construction.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{FlowError, FlowResult};
use crate::input::{MediaFile, Modality, Submission, AUDIO_PLACEHOLDER_CONTENT};
use crate::result::TransformResult;

/// Environment variable naming the backend base URL.
pub const BACKEND_URL_ENV: &str = "POLYFLOW_BACKEND_URL";

/// Development fallback when [`BACKEND_URL_ENV`] is unset.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Current application version (from Cargo.toml)
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolved backend location. Construct once, thread through the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    /// Explicit base URL (trailing slashes are trimmed).
    pub fn new(base_url: impl Into<String>) -> Self {
        BackendConfig {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve from the environment, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        match std::env::var(BACKEND_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => BackendConfig::new(url),
            _ => {
                warn!(
                    "{} not set, using development default {}",
                    BACKEND_URL_ENV, DEFAULT_BASE_URL
                );
                BackendConfig::new(DEFAULT_BASE_URL)
            }
        }
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an `/api/` route.
    fn api_url(&self, route: &str) -> String {
        format!("{}/api/{}", self.base_url, route)
    }
}

/// JSON body for `POST /api/process`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub session_id: String,
    pub input_type: Modality,
    pub content: String,
    pub description: Option<String>,
}

impl ProcessRequest {
    /// Shape the JSON request for a non-image submission.
    ///
    /// Audio content is replaced by the fixed placeholder; transcription is
    /// not performed client-side.
    pub fn from_submission(session_id: &str, submission: &Submission) -> Option<ProcessRequest> {
        let (input_type, content) = match submission {
            Submission::Text { content } => (Modality::Text, content.clone()),
            Submission::Code { content } => (Modality::Code, content.clone()),
            Submission::Audio { .. } => (Modality::Audio, AUDIO_PLACEHOLDER_CONTENT.to_string()),
            Submission::Image { .. } => return None,
        };
        Some(ProcessRequest {
            session_id: session_id.to_string(),
            input_type,
            content,
            description: None,
        })
    }
}

/// Error body the backend attaches to non-200 responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the processing backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendConfig,
    client: reqwest::Client,
}

impl BackendClient {
    /// Build a client against the given backend.
    pub fn new(config: BackendConfig) -> FlowResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("Polyflow/{}", CURRENT_VERSION))
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| FlowError::config(format!("failed to create HTTP client: {}", e)))?;
        Ok(BackendClient { config, client })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Submit one input and await the three-part result.
    ///
    /// Exactly one request is issued per call; the caller is responsible for
    /// not overlapping submissions (the GUI disables its trigger while one is
    /// in flight).
    pub async fn submit(
        &self,
        session_id: &str,
        submission: &Submission,
    ) -> FlowResult<TransformResult> {
        info!(
            modality = submission.modality().as_str(),
            session = session_id,
            "submitting input to backend"
        );
        match submission {
            Submission::Image { file, description } => {
                self.process_image(session_id, file, description).await
            }
            other => {
                let request = ProcessRequest::from_submission(session_id, other)
                    .ok_or_else(|| FlowError::Internal {
                        message: "image submission routed to JSON endpoint".to_string(),
                    })?;
                self.process(&request).await
            }
        }
    }

    /// `POST /api/process` with a JSON body.
    async fn process(&self, request: &ProcessRequest) -> FlowResult<TransformResult> {
        let url = self.config.api_url("process");
        debug!(url = url.as_str(), "POST process");
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| FlowError::network(e.to_string()))?;
        Self::parse_response(response).await
    }

    /// `POST /api/process-image` with a multipart form.
    async fn process_image(
        &self,
        session_id: &str,
        file: &MediaFile,
        description: &str,
    ) -> FlowResult<TransformResult> {
        let url = self.config.api_url("process-image");
        debug!(
            url = url.as_str(),
            bytes = file.bytes.len(),
            "POST process-image"
        );
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(|e| FlowError::Internal {
                message: format!("invalid MIME type '{}': {}", file.mime, e),
            })?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("session_id", session_id.to_string())
            .text("description", description.to_string());
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| FlowError::network(e.to_string()))?;
        Self::parse_response(response).await
    }

    /// Shared response handling: 200 parses the result, anything else mines
    /// the body for a `detail` message.
    async fn parse_response(response: reqwest::Response) -> FlowResult<TransformResult> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail);
            warn!(status = status.as_u16(), "backend rejected submission");
            return Err(match detail {
                Some(detail) => FlowError::backend(detail),
                None => FlowError::network(format!("backend returned {}", status)),
            });
        }
        response
            .json::<TransformResult>()
            .await
            .map_err(|e| FlowError::InvalidResponse {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = BackendConfig::new("http://example.com/");
        assert_eq!(config.base_url(), "http://example.com");
        assert_eq!(config.api_url("process"), "http://example.com/api/process");
    }

    #[test]
    fn test_text_request_shape() {
        let submission = Submission::Text {
            content: "reverse a string".to_string(),
        };
        let request = ProcessRequest::from_submission("session_abc", &submission).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "session_id": "session_abc",
                "input_type": "text",
                "content": "reverse a string",
                "description": null,
            })
        );
    }

    #[test]
    fn test_audio_request_substitutes_placeholder() {
        let file = MediaFile {
            name: "recording.wav".to_string(),
            mime: "audio/wav".to_string(),
            bytes: vec![0, 1, 2],
        };
        let submission = Submission::Audio { file };
        let request = ProcessRequest::from_submission("s", &submission).unwrap();
        assert_eq!(request.input_type, Modality::Audio);
        assert_eq!(request.content, AUDIO_PLACEHOLDER_CONTENT);
    }

    #[test]
    fn test_image_submission_is_not_a_json_request() {
        let file = MediaFile {
            name: "diagram.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![1],
        };
        let submission = Submission::Image {
            file,
            description: String::new(),
        };
        assert!(ProcessRequest::from_submission("s", &submission).is_none());
    }

    #[test]
    fn test_error_body_detail_extraction() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"rate limited"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("rate limited"));

        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.detail.is_none());
    }
}
