//! Comment Data Structures
//!
//! This module defines `CommentRecord`, the shape of a comment as it crosses the
//! transport boundary, and `CommentUpdate`, the partial update applied by the
//! tree mutator.
//!
//! # Wire Format
//!
//! The comments backend has gone through a schema migration, so records arrive in
//! more than one shape:
//!
//! - Identifier as `id` (string) or as legacy `_id` (string, integer, or `{"$oid": "..."}`)
//! - `parent_id` as a string, an integer, or an `{"$oid"}` object
//! - Content as `content` or `comment`, timestamp as `created_at` or `commented_at`
//! - Author either as flat `author_*` fields or as a nested `user` object
//!
//! Field names are snake_case on the wire; camelCase aliases are accepted.
//!
//! # Examples
//!
//! ```rust
//! use commentary_core::models::CommentRecord;
//!
//! let record: CommentRecord = serde_json::from_str(
//!     r#"{"_id": {"$oid": "65f0c1"}, "parent_id": null, "comment": "First!"}"#,
//! ).unwrap();
//!
//! assert_eq!(record.content, "First!");
//! assert!(record.parent_id.is_none());
//! assert!(record.replies.is_empty());
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Legacy identifier carried in the `_id` field
///
/// Converted to its string form by the identity resolver; the rest of the
/// engine only ever sees canonical string ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyId {
    /// Plain string identifier
    Text(String),
    /// Numeric identifier
    Number(i64),
    /// Extended-JSON object identifier (`{"$oid": "..."}`)
    Object {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl fmt::Display for LegacyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegacyId::Text(value) => write!(f, "{}", value),
            LegacyId::Number(value) => write!(f, "{}", value),
            LegacyId::Object { oid } => write!(f, "{}", oid),
        }
    }
}

/// Author object some backend versions embed instead of flat author fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A comment as received from the comments backend.
///
/// # Fields
///
/// - `id` / `legacy_id`: identifier, resolved to one canonical key by
///   [`resolve_id`](crate::tree::resolve_id)
/// - `parent_id`: parent comment reference, `None` for top-level comments
/// - `content`: sanitized, display-ready text
/// - `author_*` / `user`: author details in either backend shape
/// - `created_at`: creation timestamp, used for relative-time display
/// - `is_edited`: set after any successful update
/// - `replies`: nested replies, always present (possibly empty) in tree form
/// - `reply_count`: number of direct replies
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Canonical identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Identifier from before the backend schema migration
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<LegacyId>,

    /// Parent comment ID (None means top-level)
    #[serde(
        default,
        alias = "parentId",
        deserialize_with = "deserialize_parent_id"
    )]
    pub parent_id: Option<String>,

    /// Display-ready comment text
    #[serde(default, alias = "comment")]
    pub content: String,

    #[serde(default, alias = "authorName", skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    #[serde(default, alias = "authorEmail", skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,

    #[serde(
        default,
        alias = "authorAvatarUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub author_avatar_url: Option<String>,

    /// Nested author object (newer backend responses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<CommentUser>,

    /// Creation timestamp
    ///
    /// Accepts RFC 3339, ISO-8601 without an offset (read as UTC), and epoch
    /// milliseconds. Anything else is dropped rather than failing the record.
    #[serde(
        default,
        alias = "createdAt",
        alias = "commented_at",
        deserialize_with = "deserialize_created_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// Whether the comment has been edited since it was posted
    #[serde(default, alias = "isEdited")]
    pub is_edited: bool,

    /// Direct replies, in display order
    #[serde(default, deserialize_with = "deserialize_replies")]
    pub replies: Vec<CommentRecord>,

    /// Number of direct replies (kept equal to `replies.len()` by the mutator)
    #[serde(default, alias = "replyCount")]
    pub reply_count: usize,
}

impl CommentRecord {
    /// Create a comment with an explicit id
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use commentary_core::models::CommentRecord;
    /// let reply = CommentRecord::new("42", Some("7".to_string()), "Agreed");
    /// assert_eq!(reply.id.as_deref(), Some("42"));
    /// assert_eq!(reply.reply_count, 0);
    /// ```
    pub fn new(id: impl Into<String>, parent_id: Option<String>, content: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            parent_id,
            content: content.into(),
            created_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Builder-style author setter
    pub fn with_author(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self.author_email = Some(email.into());
        self
    }

    /// Check if this comment is top-level by declaration (no parent reference)
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if this comment carries nested replies
    pub fn has_replies(&self) -> bool {
        !self.replies.is_empty()
    }

    /// Author name for display, falling back to `"Anonymous"`
    ///
    /// Prefers the nested `user` object (`full_name`, `username`, `name`) over
    /// the flat `author_name` field.
    pub fn author_display_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|user| {
                user.full_name
                    .as_deref()
                    .or(user.username.as_deref())
                    .or(user.name.as_deref())
            })
            .or(self.author_name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Anonymous")
    }

    /// Author email from either backend shape
    pub fn display_email(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.email.as_deref())
            .or(self.author_email.as_deref())
    }

    /// Author avatar URL from either backend shape
    pub fn display_avatar(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.profile_picture.as_deref().or(user.image.as_deref()))
            .or(self.author_avatar_url.as_deref())
    }
}

/// Accept a parent reference as a string, an integer, or an `{"$oid"}` object
fn deserialize_parent_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LegacyId>::deserialize(deserializer)?;
    Ok(raw
        .map(|id| id.to_string())
        .filter(|id| !id.trim().is_empty()))
}

/// Timestamp shapes seen from the comments backend
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Millis(i64),
    FractionalMillis(f64),
    Other(IgnoredAny),
}

/// Formats tried, in order, for timestamps without an offset
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

fn parse_timestamp_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Accept any known timestamp shape; unreadable values become `None`
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<RawTimestamp>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let parsed = match &raw {
        RawTimestamp::Text(text) => parse_timestamp_text(text),
        RawTimestamp::Millis(millis) => DateTime::from_timestamp_millis(*millis),
        RawTimestamp::FractionalMillis(millis) if millis.is_finite() => {
            DateTime::from_timestamp_millis(millis.round() as i64)
        }
        RawTimestamp::FractionalMillis(_) | RawTimestamp::Other(_) => None,
    };

    if parsed.is_none() {
        match raw {
            RawTimestamp::Text(text) => {
                tracing::debug!("Ignoring unreadable comment timestamp '{}'", text)
            }
            _ => tracing::debug!("Ignoring comment timestamp of unsupported type"),
        }
    }

    Ok(parsed)
}

/// Treat an explicit `"replies": null` the same as a missing field
fn deserialize_replies<'de, D>(deserializer: D) -> Result<Vec<CommentRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<CommentRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Partial update for the content-bearing fields of a comment
///
/// Only fields set to `Some` are written; `replies`, identifiers and the parent
/// reference are never touched by an update.
///
/// # Examples
///
/// ```rust
/// # use commentary_core::models::CommentUpdate;
/// let update = CommentUpdate::new()
///     .with_content("Fixed a typo".to_string())
///     .mark_edited();
/// assert!(!update.is_empty());
/// assert_eq!(update.is_edited, Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<CommentUser>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_edited: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CommentUpdate {
    /// Create a new empty CommentUpdate
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an update carrying every content-bearing field of `record`
    ///
    /// Used to apply a record returned by the backend after an edit.
    pub fn from_record(record: &CommentRecord) -> Self {
        Self {
            content: Some(record.content.clone()),
            author_name: record.author_name.clone(),
            author_email: record.author_email.clone(),
            author_avatar_url: record.author_avatar_url.clone(),
            user: record.user.clone(),
            is_edited: Some(record.is_edited),
            created_at: record.created_at,
        }
    }

    /// Set content update
    pub fn with_content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    /// Flag the comment as edited
    pub fn mark_edited(mut self) -> Self {
        self.is_edited = Some(true);
        self
    }

    /// Check if update contains any changes
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.author_name.is_none()
            && self.author_email.is_none()
            && self.author_avatar_url.is_none()
            && self.user.is_none()
            && self.is_edited.is_none()
            && self.created_at.is_none()
    }

    /// Write the supplied fields onto `record`
    pub(crate) fn apply_to(self, record: &mut CommentRecord) {
        if let Some(content) = self.content {
            record.content = content;
        }
        if let Some(author_name) = self.author_name {
            record.author_name = Some(author_name);
        }
        if let Some(author_email) = self.author_email {
            record.author_email = Some(author_email);
        }
        if let Some(author_avatar_url) = self.author_avatar_url {
            record.author_avatar_url = Some(author_avatar_url);
        }
        if let Some(user) = self.user {
            record.user = Some(user);
        }
        if let Some(is_edited) = self.is_edited {
            record.is_edited = is_edited;
        }
        if let Some(created_at) = self.created_at {
            record.created_at = Some(created_at);
        }
    }
}
