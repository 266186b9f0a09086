//! # Client Session
//!
//! A [`Session`] is an opaque identifier generated once at process start and
//! sent with every backend request so the backend can correlate requests to
//! its own per-client context. It is not a security credential.
//!
//! The identifier is immutable for the process lifetime; there is no teardown
//! call (the session simply ends when the process exits).
//!
//! ## Example
//!
//! ```rust
//! use flow_core::session::Session;
//!
//! let session = Session::generate();
//! assert!(session.id().starts_with("session_"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-process client session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque identifier sent as `session_id` on every request
    id: String,

    /// When the session was created (process start)
    created: DateTime<Utc>,
}

impl Session {
    /// Generate a fresh session for this process.
    pub fn generate() -> Self {
        Session {
            id: format!("session_{}", Uuid::new_v4().simple()),
            created: Utc::now(),
        }
    }

    /// The identifier string sent to the backend.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the session was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_format() {
        let session = Session::generate();
        assert!(session.id().starts_with("session_"));
        // 32 hex chars from the simple uuid encoding
        assert_eq!(session.id().len(), "session_".len() + 32);
    }

    #[test]
    fn test_sessions_are_unique() {
        let a = Session::generate();
        let b = Session::generate();
        assert_ne!(a.id(), b.id());
    }
}
