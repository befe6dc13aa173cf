//! Identity Resolver
//!
//! Normalizes the two identifier fields a comment may carry (`id`, or the
//! legacy `_id`) into one canonical string key. Everything past this module
//! compares comments by that key only.

use crate::models::CommentRecord;
use crate::tree::error::CommentTreeError;
use std::borrow::Cow;

/// Resolve the canonical identifier of a comment
///
/// A non-blank `id` wins; otherwise the string form of `_id` is used.
///
/// # Errors
///
/// Returns `CommentTreeError::InvalidRecord` if neither field yields a
/// non-blank value.
///
/// # Examples
///
/// ```rust
/// # use commentary_core::models::{CommentRecord, LegacyId};
/// # use commentary_core::tree::resolve_id;
/// let record = CommentRecord {
///     legacy_id: Some(LegacyId::Object { oid: "65f0c1".to_string() }),
///     ..Default::default()
/// };
/// assert_eq!(resolve_id(&record).unwrap(), "65f0c1");
///
/// assert!(resolve_id(&CommentRecord::default()).is_err());
/// ```
pub fn resolve_id(record: &CommentRecord) -> Result<String, CommentTreeError> {
    canonical_id(record)
        .map(Cow::into_owned)
        .ok_or_else(|| CommentTreeError::invalid_record("comment has neither `id` nor `_id`"))
}

/// Check whether `record` resolves to `target` without allocating for plain ids
pub fn matches_id(record: &CommentRecord, target: &str) -> bool {
    canonical_id(record).is_some_and(|id| id == target)
}

pub(crate) fn canonical_id(record: &CommentRecord) -> Option<Cow<'_, str>> {
    if let Some(id) = record.id.as_deref().filter(|id| !id.trim().is_empty()) {
        return Some(Cow::Borrowed(id));
    }

    record
        .legacy_id
        .as_ref()
        .map(|legacy| legacy.to_string())
        .filter(|id| !id.trim().is_empty())
        .map(Cow::Owned)
}
