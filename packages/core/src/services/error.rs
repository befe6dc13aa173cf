//! Service Layer Error Types
//!
//! This module defines error types for comment thread operations and for the
//! transport the thread drives.

use crate::tree::CommentTreeError;
use thiserror::Error;

/// Failure reported by a comments transport
///
/// Transport errors are surfaced to the caller unchanged; the thread never
/// retries and never applies a local mutation after one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Backend unreachable or the connection failed
    #[error("Network error: {0}")]
    Network(String),

    /// Missing or expired credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but not allowed (e.g. editing someone else's comment)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Backend rejected the request as invalid
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Article or comment does not exist on the backend
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Comment thread operation errors
#[derive(Error, Debug)]
pub enum CommentServiceError {
    /// Content is empty after trimming
    #[error("Comment content is required")]
    EmptyContent,

    /// Content exceeds the configured maximum length
    #[error("Comment is too long: {actual} characters (maximum {max})")]
    ContentTooLong { max: usize, actual: usize },

    /// Transport call failed; the thread is unchanged
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Backend answered a delete with a failure flag
    #[error("Backend refused to delete comment {comment_id}")]
    DeleteRejected { comment_id: String },

    /// Backend returned a record the tree cannot address
    #[error("Invalid comment from backend: {0}")]
    InvalidRecord(#[from] CommentTreeError),

    /// Thread was disposed before the response arrived; the response was dropped
    #[error("Comment thread has been disposed")]
    ThreadDisposed,

    /// Thread configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CommentServiceError {
    /// Create a content too long error
    pub fn content_too_long(max: usize, actual: usize) -> Self {
        Self::ContentTooLong { max, actual }
    }

    /// Create a delete rejected error
    pub fn delete_rejected(comment_id: impl Into<String>) -> Self {
        Self::DeleteRejected {
            comment_id: comment_id.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether the error is the dropped-after-dispose case callers may ignore
    pub fn is_disposed(&self) -> bool {
        matches!(self, Self::ThreadDisposed)
    }
}
