//! Comments Transport Contract
//!
//! The thread never talks to the network itself. It drives an implementation
//! of [`CommentTransport`] (typically an HTTP client for the comments API) and
//! only touches the local tree after a call succeeds.

use crate::models::CommentRecord;
use crate::services::error::TransportError;
use async_trait::async_trait;

/// Remote comments service
#[async_trait]
pub trait CommentTransport: Send + Sync {
    /// Fetch an article's comments, flat or pre-nested
    async fn fetch_comments(&self, article_id: &str) -> Result<Vec<CommentRecord>, TransportError>;

    /// Create a comment; `content` has already been sanitized
    async fn create_comment(
        &self,
        article_id: &str,
        content: &str,
        parent_id: Option<&str>,
    ) -> Result<CommentRecord, TransportError>;

    /// Replace a comment's content; `content` has already been sanitized
    async fn update_comment(
        &self,
        comment_id: &str,
        content: &str,
    ) -> Result<CommentRecord, TransportError>;

    /// Delete a comment, returning the backend's success flag
    async fn delete_comment(&self, comment_id: &str) -> Result<bool, TransportError>;
}
