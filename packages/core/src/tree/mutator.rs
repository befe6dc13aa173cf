//! Tree Mutator
//!
//! Insert, update and delete operations over a [`CommentForest`].
//!
//! Each operation takes the forest by value and hands back a [`TreeMutation`]
//! holding the resulting forest. The caller's previous forest is moved in, so
//! no partial change is ever observable from outside. No index is kept between
//! calls: every operation scans from the roots.
//!
//! A target that cannot be found is not an error. The forest comes back
//! unchanged with [`MutationOutcome::TargetNotFound`], which keeps the thread
//! usable when local state is stale.

use crate::models::{CommentRecord, CommentUpdate};
use crate::tree::forest::CommentForest;
use crate::tree::identity::{canonical_id, matches_id};
use serde::{Deserialize, Serialize};

/// Whether a mutation found its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOutcome {
    /// Target found and the change applied
    Applied,
    /// Target not in the forest; the forest is unchanged
    TargetNotFound,
    /// Inserted comment's id is already in the forest; the forest is unchanged
    AlreadyPresent,
}

/// Result of a tree mutation
#[derive(Debug, Clone, PartialEq)]
pub struct TreeMutation {
    /// Forest after the mutation
    pub forest: CommentForest,

    /// Whether the target was found
    pub outcome: MutationOutcome,
}

impl TreeMutation {
    fn new(roots: Vec<CommentRecord>, outcome: MutationOutcome) -> Self {
        Self {
            forest: CommentForest::from_roots(roots),
            outcome,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.outcome == MutationOutcome::Applied
    }

    pub fn into_forest(self) -> CommentForest {
        self.forest
    }
}

/// Add a comment to the forest
///
/// With `parent_id = None` the comment becomes the last root. Otherwise it is
/// appended to the replies of the comment with that id, found depth-first at
/// any level, and the parent's `reply_count` is brought up to date.
///
/// If a comment with the reply's id is already anywhere in the forest (for
/// example because a reload picked it up first), the forest is returned
/// unchanged with [`MutationOutcome::AlreadyPresent`]. The existing node wins.
///
/// # Examples
///
/// ```rust
/// # use commentary_core::models::CommentRecord;
/// # use commentary_core::tree::{build_tree, insert_reply, MutationOutcome};
/// let forest = build_tree(vec![CommentRecord::new("1", None, "a")]);
///
/// let mutation = insert_reply(forest, Some("1"), CommentRecord::new("2", Some("1".into()), "b"));
/// assert_eq!(mutation.outcome, MutationOutcome::Applied);
/// assert_eq!(mutation.forest.roots()[0].reply_count, 1);
///
/// let missing = insert_reply(mutation.forest, Some("404"), CommentRecord::new("3", None, "c"));
/// assert_eq!(missing.outcome, MutationOutcome::TargetNotFound);
/// ```
pub fn insert_reply(
    forest: CommentForest,
    parent_id: Option<&str>,
    mut reply: CommentRecord,
) -> TreeMutation {
    if let Some(reply_id) = canonical_id(&reply) {
        if forest.contains(&reply_id) {
            tracing::debug!("Comment '{}' already in thread, keeping existing node", reply_id);
            return TreeMutation::new(forest.into_roots(), MutationOutcome::AlreadyPresent);
        }
    }

    reply.reply_count = reply.replies.len();
    let mut roots = forest.into_roots();

    let Some(parent_id) = parent_id else {
        roots.push(reply);
        return TreeMutation::new(roots, MutationOutcome::Applied);
    };

    match find_mut(&mut roots, parent_id) {
        Some(parent) => {
            parent.replies.push(reply);
            parent.reply_count = parent.replies.len();
            TreeMutation::new(roots, MutationOutcome::Applied)
        }
        None => {
            tracing::debug!("Reply target '{}' not in thread, dropping reply", parent_id);
            TreeMutation::new(roots, MutationOutcome::TargetNotFound)
        }
    }
}

/// Overwrite the content-bearing fields of a comment at any depth
///
/// Only the fields set in `update` change. The comment's replies, identifiers
/// and parent reference are kept as they are.
pub fn update_record(forest: CommentForest, target_id: &str, update: CommentUpdate) -> TreeMutation {
    let mut roots = forest.into_roots();

    match find_mut(&mut roots, target_id) {
        Some(target) => {
            update.apply_to(target);
            TreeMutation::new(roots, MutationOutcome::Applied)
        }
        None => {
            tracing::debug!("Update target '{}' not in thread", target_id);
            TreeMutation::new(roots, MutationOutcome::TargetNotFound)
        }
    }
}

/// Remove a comment and its entire reply subtree
///
/// Removing a nested comment brings its parent's `reply_count` down by one.
/// Replies are never re-parented.
pub fn delete_node(forest: CommentForest, target_id: &str) -> TreeMutation {
    let mut roots = forest.into_roots();

    if remove_subtree(&mut roots, target_id) {
        TreeMutation::new(roots, MutationOutcome::Applied)
    } else {
        tracing::debug!("Delete target '{}' not in thread", target_id);
        TreeMutation::new(roots, MutationOutcome::TargetNotFound)
    }
}

fn find_mut<'a>(nodes: &'a mut [CommentRecord], target: &str) -> Option<&'a mut CommentRecord> {
    for node in nodes.iter_mut() {
        if matches_id(node, target) {
            return Some(node);
        }
        if let Some(found) = find_mut(&mut node.replies, target) {
            return Some(found);
        }
    }
    None
}

fn remove_subtree(nodes: &mut Vec<CommentRecord>, target: &str) -> bool {
    if let Some(pos) = nodes.iter().position(|node| matches_id(node, target)) {
        nodes.remove(pos);
        return true;
    }

    for node in nodes.iter_mut() {
        if remove_subtree(&mut node.replies, target) {
            node.reply_count = node.replies.len();
            return true;
        }
    }

    false
}
