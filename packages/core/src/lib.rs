//! Commentary Core
//!
//! Comment tree engine for threaded article discussions: turns the records a
//! comments backend returns into a nested forest, keeps that forest consistent
//! across local create/edit/delete operations, and projects it into rows for
//! display.
//!
//! # Architecture
//!
//! - **Owned trees**: every mutation consumes a forest and returns a new one,
//!   so callers always hold a single consistent snapshot
//! - **Tolerant input**: mixed `id`/`_id` identifiers, orphans, and stale
//!   reply counts are normalized instead of rejected
//! - **Confirm then apply**: the thread service mutates its forest only after
//!   the backend confirms a change
//!
//! # Modules
//!
//! - [`models`] - Comment records and partial updates
//! - [`tree`] - Identity resolution, tree building, mutation, and traversal
//! - [`sanitizer`] - Content sanitizer boundary
//! - [`view`] - Per-viewer display rows
//! - [`services`] - `CommentThread` service and transport contract
//! - [`config`] - Thread configuration

pub mod config;
pub mod models;
pub mod sanitizer;
pub mod services;
pub mod tree;
pub mod view;

// Re-export commonly used types
pub use config::CommentThreadConfig;
pub use models::{CommentRecord, CommentUpdate, CommentUser, LegacyId};
pub use sanitizer::{ContentSanitizer, FnSanitizer, NoopSanitizer};
pub use services::{
    CommentServiceError, CommentThread, CommentTransport, ThreadEvent, TransportError,
};
pub use tree::{
    build_tree, count_all, count_roots, delete_node, flatten_for_display, insert_reply,
    resolve_id, update_record, CommentForest, CommentTreeError, MutationOutcome, TreeMutation,
};
pub use view::{format_distance, project_thread, CommentView};
