//! Error types for the comment tree engine

use thiserror::Error;

/// Errors raised while resolving or placing comment records
///
/// Missing targets for update, delete, or reply are not errors: they are
/// reported as [`MutationOutcome::TargetNotFound`](crate::tree::MutationOutcome)
/// so that stale local state never breaks the thread.
///
/// # Examples
///
/// ```rust
/// use commentary_core::tree::CommentTreeError;
///
/// let err = CommentTreeError::invalid_record("neither id nor _id is set");
/// assert_eq!(err.to_string(), "Invalid comment record: neither id nor _id is set");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommentTreeError {
    /// Record has no usable identifier
    ///
    /// Raised by the identity resolver. The tree builder logs the record and
    /// leaves it out of the forest.
    #[error("Invalid comment record: {reason}")]
    InvalidRecord { reason: String },
}

impl CommentTreeError {
    /// Create an InvalidRecord error
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            reason: reason.into(),
        }
    }
}
