//! Comment forest container

use crate::models::CommentRecord;
use crate::tree::identity::matches_id;
use serde::{Deserialize, Serialize};

/// Ordered sequence of top-level comments, each the root of a reply subtree
///
/// Serializes as a plain JSON array, the same shape the thread is handed to
/// the presentation layer in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentForest {
    roots: Vec<CommentRecord>,
}

impl CommentForest {
    /// Create an empty forest
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap roots that are already in tree form
    pub fn from_roots(roots: Vec<CommentRecord>) -> Self {
        Self { roots }
    }

    /// Top-level comments in display order
    pub fn roots(&self) -> &[CommentRecord] {
        &self.roots
    }

    /// Unwrap into the root sequence
    pub fn into_roots(self) -> Vec<CommentRecord> {
        self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Find a comment at any depth (depth-first, sibling order)
    pub fn find(&self, id: &str) -> Option<&CommentRecord> {
        find_in(&self.roots, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

impl From<Vec<CommentRecord>> for CommentForest {
    fn from(roots: Vec<CommentRecord>) -> Self {
        Self::from_roots(roots)
    }
}

fn find_in<'a>(nodes: &'a [CommentRecord], id: &str) -> Option<&'a CommentRecord> {
    nodes.iter().find_map(|node| {
        if matches_id(node, id) {
            Some(node)
        } else {
            find_in(&node.replies, id)
        }
    })
}
