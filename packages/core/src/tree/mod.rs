//! Comment Tree Engine
//!
//! Builds nested comment threads from backend responses and keeps them in
//! shape as comments are added, edited and removed.
//!
//! - [`identity`] - Canonical id resolution across `id` / `_id`
//! - [`builder`] - Flat or pre-nested list → [`CommentForest`]
//! - [`mutator`] - Insert reply, update fields, delete subtree
//! - [`projector`] - Root count and depth-annotated display order
//!
//! All operations are synchronous and allocation-light; comment threads are
//! hundreds of records, not millions.

pub mod builder;
pub mod error;
pub mod forest;
pub mod identity;
pub mod mutator;
pub mod projector;

pub use builder::build_tree;
pub use error::CommentTreeError;
pub use forest::CommentForest;
pub use identity::{matches_id, resolve_id};
pub use mutator::{delete_node, insert_reply, update_record, MutationOutcome, TreeMutation};
pub use projector::{count_all, count_roots, flatten_for_display, max_depth, DisplayEntry};
