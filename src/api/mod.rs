//! UserApi trait and the remote collection client.
//!
//! The controller only talks to [`UserApi`], so tests can swap in an
//! in-memory implementation and the HTTP details stay in [`http`].

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{RemoteUser, UserPayload};

/// Errors from the remote collection.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server rejected request with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("server assigned id {0}, which is already in use")]
    DuplicateId(u64),
}

impl ApiError {
    /// Whether the failure happened before a status line was received,
    /// or the body could not be read.
    ///
    /// Both kinds surface as the same banner; the split only shows up in logs.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode(_))
    }
}

/// CRUD access to the remote user collection.
///
/// Each method is exactly one HTTP round-trip.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Read the full collection.
    async fn list_users(&self) -> Result<Vec<RemoteUser>, ApiError>;

    /// Create a user and return the server-assigned id.
    async fn create_user(&self, payload: &UserPayload) -> Result<u64, ApiError>;

    /// Replace the user at `id`. The response body is not consulted.
    async fn update_user(&self, id: u64, payload: &UserPayload) -> Result<(), ApiError>;

    /// Remove the user at `id`.
    async fn delete_user(&self, id: u64) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_failures() {
        assert!(ApiError::Transport("connection refused".into()).is_transport());
        assert!(ApiError::Decode("expected value".into()).is_transport());
        let rejected = ApiError::Status {
            status: 404,
            body: "{}".into(),
        };
        assert!(!rejected.is_transport());
        assert_eq!(
            rejected.to_string(),
            "server rejected request with HTTP 404: {}"
        );
        assert!(!ApiError::DuplicateId(11).is_transport());
    }
}
