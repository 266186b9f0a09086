//! # flow_core - Polyflow Session & Backend Core
//!
//! `flow_core` is the domain core of Polyflow: the per-process session, the
//! four-modality input collector, the backend HTTP client, and the cleanup
//! and export helpers the results view relies on. Everything here runs
//! without a display; the GUI crate is a thin Iced view over these types.
//!
//! ## Design Philosophy
//!
//! - **Explicit configuration**: the backend base URL is resolved once and
//!   threaded through [`client::BackendClient`], never read ad hoc
//! - **JSON-First**: wire types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Injected capabilities**: file export goes through a sink trait so the
//!   logic is testable headless
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flow_core::client::{BackendClient, BackendConfig};
//! use flow_core::input::Submission;
//! use flow_core::session::Session;
//!
//! # async fn run() -> flow_core::errors::FlowResult<()> {
//! let session = Session::generate();
//! let client = BackendClient::new(BackendConfig::from_env())?;
//! let submission = Submission::Text {
//!     content: "reverse a string".to_string(),
//! };
//! let result = client.submit(session.id(), &submission).await?;
//! println!("{}", result.pseudocode);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`session`] - Per-process opaque session identifier
//! - [`input`] - Modalities, file classification, collector state
//! - [`languages`] - The fixed ten-language target catalog
//! - [`result`] - The three-part backend response
//! - [`client`] - Backend HTTP client and configuration
//! - [`flowchart`] - Display cleanup for flowchart text
//! - [`audio`] - Microphone capture and WAV encoding
//! - [`export`] - Download filenames and the export sink
//! - [`prompts`] - Example prompt catalog
//! - [`errors`] - Structured error types

pub mod audio;
pub mod client;
pub mod errors;
pub mod export;
pub mod flowchart;
pub mod input;
pub mod languages;
pub mod prompts;
pub mod result;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use client::{BackendClient, BackendConfig};
pub use errors::{FlowError, FlowResult};
pub use input::{InputState, MediaFile, Modality, Submission};
pub use languages::Language;
pub use result::TransformResult;
pub use session::Session;
