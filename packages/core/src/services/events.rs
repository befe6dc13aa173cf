//! Thread Events
//!
//! Events published by [`CommentThread`](crate::services::CommentThread) on a
//! tokio broadcast channel after each applied change, so the presentation
//! layer can re-render from a fresh snapshot.

use serde::{Deserialize, Serialize};

/// Change applied to a comment thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ThreadEvent {
    /// Thread replaced by a fresh fetch
    Loaded {
        article_id: String,
        root_count: usize,
        total_count: usize,
    },
    /// Comment or reply added
    CommentAdded {
        comment_id: String,
        parent_id: Option<String>,
    },
    /// Comment content replaced
    CommentEdited { comment_id: String },
    /// Comment and its replies removed
    CommentDeleted { comment_id: String },
}
