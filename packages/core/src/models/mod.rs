//! Data Models
//!
//! This module contains the comment data structures shared by the tree engine
//! and the thread service:
//!
//! - `CommentRecord` - A comment as it crosses the transport boundary
//! - `CommentUpdate` - Partial update applied to an existing comment
//! - `CommentUser` / `LegacyId` - Alternative backend shapes for authors and ids

mod comment;


pub use comment::{CommentRecord, CommentUpdate, CommentUser, LegacyId};
