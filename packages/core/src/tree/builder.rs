//! Tree Builder
//!
//! Turns the comment list returned by the backend into a nested forest.
//!
//! # Strategy
//!
//! Construction uses an adjacency list so that data loading stays separate
//! from tree shaping:
//!
//! 1. Resolve every record's id and index it (records without an id, and
//!    repeats of an id already seen, are logged and left out)
//! 2. Resolve each record's parent against the index; a parent that is not in
//!    the list promotes the record to a root
//! 3. Break parent cycles by promoting the earliest cycle member to a root
//! 4. Assemble the nested records, keeping input order for roots and siblings
//!
//! If any record already carries replies, the backend has pre-nested the
//! thread and the list is returned untouched.

use crate::models::CommentRecord;
use crate::tree::forest::CommentForest;
use crate::tree::identity::resolve_id;
use std::collections::HashMap;

/// Build a nested forest from a flat or already-nested comment list
///
/// # Examples
///
/// ```rust
/// # use commentary_core::models::CommentRecord;
/// # use commentary_core::tree::{build_tree, count_roots};
/// let forest = build_tree(vec![
///     CommentRecord::new("1", None, "a"),
///     CommentRecord::new("2", Some("1".to_string()), "b"),
///     CommentRecord::new("3", Some("99".to_string()), "c"),
/// ]);
///
/// assert_eq!(count_roots(&forest), 2);
/// assert_eq!(forest.roots()[0].reply_count, 1);
/// ```
pub fn build_tree(records: Vec<CommentRecord>) -> CommentForest {
    if records.iter().any(CommentRecord::has_replies) {
        tracing::debug!(
            "Comment list of {} records is already nested, keeping backend structure",
            records.len()
        );
        return CommentForest::from_roots(records);
    }

    let received = records.len();

    // First pass: canonical ids and lookup index
    let mut nodes: Vec<CommentRecord> = Vec::with_capacity(received);
    let mut index: HashMap<String, usize> = HashMap::with_capacity(received);
    for mut record in records {
        let id = match resolve_id(&record) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Skipping comment record: {}", e);
                continue;
            }
        };

        if index.contains_key(&id) {
            tracing::warn!("Skipping duplicate comment '{}'", id);
            continue;
        }

        record.replies = Vec::new();
        record.reply_count = 0;
        index.insert(id, nodes.len());
        nodes.push(record);
    }

    // Second pass: effective parents (self-references count as missing)
    let mut parent_of: Vec<Option<usize>> = nodes
        .iter()
        .enumerate()
        .map(|(pos, record)| {
            let parent_id = record.parent_id.as_deref()?;
            match index.get(parent_id) {
                Some(&parent) if parent != pos => Some(parent),
                _ => {
                    tracing::debug!(
                        "Parent '{}' not in thread, promoting reply to top level",
                        parent_id
                    );
                    None
                }
            }
        })
        .collect();

    break_cycles(&mut parent_of);

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut roots: Vec<usize> = Vec::new();
    for (pos, parent) in parent_of.iter().enumerate() {
        match parent {
            Some(parent) => children[*parent].push(pos),
            None => roots.push(pos),
        }
    }

    let mut slots: Vec<Option<CommentRecord>> = nodes.into_iter().map(Some).collect();
    let roots: Vec<CommentRecord> = roots
        .into_iter()
        .filter_map(|pos| assemble(pos, &mut slots, &children))
        .collect();

    tracing::debug!(
        "Built comment tree: {} records in, {} kept, {} top-level",
        received,
        index.len(),
        roots.len()
    );

    CommentForest::from_roots(roots)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    OnPath,
    Done,
}

/// Detach the earliest member of every parent cycle so it becomes a root
fn break_cycles(parent_of: &mut [Option<usize>]) {
    let mut state = vec![Visit::New; parent_of.len()];

    for start in 0..parent_of.len() {
        let mut path = Vec::new();
        let mut current = Some(start);

        while let Some(pos) = current {
            match state[pos] {
                Visit::Done => break,
                Visit::OnPath => {
                    let cycle_start = path.iter().position(|&p| p == pos).unwrap_or(0);
                    if let Some(&earliest) = path[cycle_start..].iter().min() {
                        tracing::warn!(
                            "Comment parent cycle detected, promoting record #{} to top level",
                            earliest
                        );
                        parent_of[earliest] = None;
                    }
                    break;
                }
                Visit::New => {
                    state[pos] = Visit::OnPath;
                    path.push(pos);
                    current = parent_of[pos];
                }
            }
        }

        for pos in path {
            state[pos] = Visit::Done;
        }
    }
}

fn assemble(
    pos: usize,
    slots: &mut [Option<CommentRecord>],
    children: &[Vec<usize>],
) -> Option<CommentRecord> {
    let mut record = slots[pos].take()?;
    record.replies = children[pos]
        .iter()
        .filter_map(|&child| assemble(child, slots, children))
        .collect();
    record.reply_count = record.replies.len();
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LegacyId;

    fn comment(id: &str, parent: Option<&str>, content: &str) -> CommentRecord {
        CommentRecord {
            id: Some(id.to_string()),
            parent_id: parent.map(str::to_string),
            content: content.to_string(),
            ..Default::default()
        }
    }

    fn ids(records: &[CommentRecord]) -> Vec<String> {
        records.iter().map(|r| resolve_id(r).unwrap()).collect()
    }

    #[test]
    fn test_flat_list_with_orphan() {
        let forest = build_tree(vec![
            comment("1", None, "a"),
            comment("2", Some("1"), "b"),
            comment("3", Some("99"), "c"),
        ]);

        assert_eq!(ids(forest.roots()), vec!["1", "3"]);
        let first = &forest.roots()[0];
        assert_eq!(ids(&first.replies), vec!["2"]);
        assert_eq!(first.reply_count, 1);

        let orphan = &forest.roots()[1];
        assert!(orphan.replies.is_empty());
        assert_eq!(orphan.reply_count, 0);
        // Promotion does not rewrite the declared parent
        assert_eq!(orphan.parent_id.as_deref(), Some("99"));
    }

    #[test]
    fn test_reply_listed_before_parent() {
        let forest = build_tree(vec![
            comment("child", Some("root"), "b"),
            comment("root", None, "a"),
        ]);

        assert_eq!(ids(forest.roots()), vec!["root"]);
        assert_eq!(ids(&forest.roots()[0].replies), vec!["child"]);
    }

    #[test]
    fn test_sibling_order_follows_input() {
        let forest = build_tree(vec![
            comment("r", None, ""),
            comment("c", Some("r"), ""),
            comment("a", Some("r"), ""),
            comment("b", Some("r"), ""),
        ]);

        assert_eq!(ids(&forest.roots()[0].replies), vec!["c", "a", "b"]);
        assert_eq!(forest.roots()[0].reply_count, 3);
    }

    #[test]
    fn test_stale_reply_count_is_recomputed() {
        let mut root = comment("1", None, "a");
        root.reply_count = 5;
        let forest = build_tree(vec![root, comment("2", Some("1"), "b")]);

        assert_eq!(forest.roots()[0].reply_count, 1);
    }

    #[test]
    fn test_nested_input_is_returned_unchanged() {
        let mut root = comment("1", None, "a");
        root.replies.push(comment("2", Some("1"), "b"));
        root.reply_count = 1;
        // Stray flat reply referencing a nested node stays where it is
        let input = vec![root, comment("3", Some("2"), "c")];

        let forest = build_tree(input.clone());
        assert_eq!(forest.into_roots(), input);
    }

    #[test]
    fn test_records_without_identifier_are_skipped() {
        let forest = build_tree(vec![
            comment("1", None, "a"),
            CommentRecord {
                content: "no id".to_string(),
                ..Default::default()
            },
        ]);

        assert_eq!(ids(forest.roots()), vec!["1"]);
    }

    #[test]
    fn test_duplicate_ids_keep_first_occurrence() {
        let forest = build_tree(vec![
            comment("1", None, "first"),
            comment("1", None, "second"),
        ]);

        assert_eq!(forest.roots().len(), 1);
        assert_eq!(forest.roots()[0].content, "first");
    }

    #[test]
    fn test_legacy_ids_link_parents() {
        let root = CommentRecord {
            legacy_id: Some(LegacyId::Object {
                oid: "aa".to_string(),
            }),
            ..Default::default()
        };
        let reply = CommentRecord {
            legacy_id: Some(LegacyId::Number(7)),
            parent_id: Some("aa".to_string()),
            ..Default::default()
        };

        let forest = build_tree(vec![root, reply]);
        assert_eq!(ids(forest.roots()), vec!["aa"]);
        assert_eq!(ids(&forest.roots()[0].replies), vec!["7"]);
    }

    #[test]
    fn test_self_parent_is_promoted() {
        let forest = build_tree(vec![comment("1", Some("1"), "me")]);
        assert_eq!(ids(forest.roots()), vec!["1"]);
    }

    #[test]
    fn test_parent_cycle_is_broken_without_losing_records() {
        let forest = build_tree(vec![
            comment("a", Some("c"), ""),
            comment("b", Some("a"), ""),
            comment("c", Some("b"), ""),
            comment("d", None, ""),
        ]);

        // "a" is the earliest cycle member, so it becomes the root of the chain
        assert_eq!(ids(forest.roots()), vec!["a", "d"]);
        let a = &forest.roots()[0];
        assert_eq!(ids(&a.replies), vec!["b"]);
        assert_eq!(ids(&a.replies[0].replies), vec!["c"]);
        assert!(a.replies[0].replies[0].replies.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(build_tree(Vec::new()).is_empty());
    }
}
