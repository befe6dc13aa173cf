//! View Projector
//!
//! Read-only projections of a forest for display: the root count shown in the
//! thread header, and a depth-annotated pre-order listing for rendering.

use crate::models::CommentRecord;
use crate::tree::forest::CommentForest;
use crate::tree::identity::canonical_id;
use serde::Serialize;

/// One comment in display order together with its nesting depth
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayEntry<'a> {
    pub comment: &'a CommentRecord,
    /// 0 for top-level comments
    pub depth: usize,
}

impl DisplayEntry<'_> {
    /// Canonical id of the comment, if it has one
    pub fn id(&self) -> Option<String> {
        canonical_id(self.comment).map(|id| id.into_owned())
    }
}

/// Number of top-level comments (not a recursive total)
pub fn count_roots(forest: &CommentForest) -> usize {
    forest.roots().len()
}

/// Number of comments at every depth
pub fn count_all(forest: &CommentForest) -> usize {
    flatten_for_display(forest).len()
}

/// Deepest nesting level in the forest, `None` when empty
pub fn max_depth(forest: &CommentForest) -> Option<usize> {
    flatten_for_display(forest)
        .iter()
        .map(|entry| entry.depth)
        .max()
}

/// Pre-order traversal annotated with depth, keeping sibling order
///
/// # Examples
///
/// ```rust
/// # use commentary_core::models::CommentRecord;
/// # use commentary_core::tree::{build_tree, flatten_for_display};
/// let forest = build_tree(vec![
///     CommentRecord::new("1", None, "a"),
///     CommentRecord::new("2", Some("1".to_string()), "b"),
///     CommentRecord::new("3", None, "c"),
/// ]);
///
/// let listing: Vec<(String, usize)> = flatten_for_display(&forest)
///     .iter()
///     .map(|entry| (entry.id().unwrap(), entry.depth))
///     .collect();
///
/// assert_eq!(listing, vec![("1".into(), 0), ("2".into(), 1), ("3".into(), 0)]);
/// ```
pub fn flatten_for_display(forest: &CommentForest) -> Vec<DisplayEntry<'_>> {
    let mut entries = Vec::new();
    let mut stack: Vec<DisplayEntry<'_>> = forest
        .roots()
        .iter()
        .rev()
        .map(|comment| DisplayEntry { comment, depth: 0 })
        .collect();

    while let Some(entry) = stack.pop() {
        stack.extend(entry.comment.replies.iter().rev().map(|reply| DisplayEntry {
            comment: reply,
            depth: entry.depth + 1,
        }));
        entries.push(entry);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::builder::build_tree;

    fn comment(id: &str, parent: Option<&str>) -> CommentRecord {
        CommentRecord {
            id: Some(id.to_string()),
            parent_id: parent.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_flatten_is_preorder_with_depth() {
        let forest = build_tree(vec![
            comment("1", None),
            comment("2", Some("1")),
            comment("3", None),
            comment("4", Some("2")),
            comment("5", Some("1")),
        ]);

        let listing: Vec<(String, usize)> = flatten_for_display(&forest)
            .iter()
            .map(|entry| (entry.id().unwrap(), entry.depth))
            .collect();

        assert_eq!(
            listing,
            vec![
                ("1".to_string(), 0),
                ("2".to_string(), 1),
                ("4".to_string(), 2),
                ("5".to_string(), 1),
                ("3".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_counts() {
        let forest = build_tree(vec![
            comment("1", None),
            comment("2", Some("1")),
            comment("3", Some("2")),
            comment("4", None),
        ]);

        assert_eq!(count_roots(&forest), 2);
        assert_eq!(count_all(&forest), 4);
        assert_eq!(max_depth(&forest), Some(2));
    }

    #[test]
    fn test_empty_forest() {
        let forest = CommentForest::new();
        assert_eq!(count_roots(&forest), 0);
        assert!(flatten_for_display(&forest).is_empty());
        assert_eq!(max_depth(&forest), None);
    }
}
