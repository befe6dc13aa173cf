//! Thread View Model
//!
//! Per-viewer projection of a comment forest into the flat, depth-annotated
//! rows the presentation layer renders: resolved author name and avatar,
//! relative post time, edited marker, and whether the viewer owns the comment.

use crate::tree::{flatten_for_display, CommentForest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1_440;
const MINUTES_PER_MONTH: i64 = 43_200;
const MINUTES_PER_YEAR: i64 = 525_600;

/// One rendered comment row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub parent_id: Option<String>,
    pub depth: usize,
    pub author_name: String,
    pub author_avatar_url: Option<String>,
    pub content: String,
    /// Relative time since posting (e.g. "about 3 hours ago")
    pub posted: Option<String>,
    pub is_edited: bool,
    /// Viewer wrote this comment and may edit or delete it
    pub is_owner: bool,
    pub reply_count: usize,
}

/// Project a forest into display rows for `viewer_email`
///
/// Rows follow [`flatten_for_display`] order. Comments without a usable id
/// (possible only in backend-nested threads) cannot be addressed by the UI
/// and are left out.
pub fn project_thread(
    forest: &CommentForest,
    viewer_email: Option<&str>,
    now: DateTime<Utc>,
) -> Vec<CommentView> {
    flatten_for_display(forest)
        .into_iter()
        .filter_map(|entry| {
            let Some(id) = entry.id() else {
                tracing::debug!("Leaving comment without identifier out of the thread view");
                return None;
            };
            let comment = entry.comment;

            let is_owner = match (viewer_email, comment.display_email()) {
                (Some(viewer), Some(author)) => viewer.trim().eq_ignore_ascii_case(author.trim()),
                _ => false,
            };

            Some(CommentView {
                id,
                parent_id: comment.parent_id.clone(),
                depth: entry.depth,
                author_name: comment.author_display_name().to_string(),
                author_avatar_url: comment.display_avatar().map(str::to_string),
                content: comment.content.clone(),
                posted: comment.created_at.map(|at| format_distance(at, now)),
                is_edited: comment.is_edited,
                is_owner,
                reply_count: comment.reply_count,
            })
        })
        .collect()
}

/// Describe the distance between `from` and `now` in words
///
/// # Examples
///
/// ```rust
/// # use chrono::{Duration, Utc};
/// # use commentary_core::view::format_distance;
/// let now = Utc::now();
/// assert_eq!(format_distance(now - Duration::minutes(5), now), "5 minutes ago");
/// assert_eq!(format_distance(now - Duration::hours(3), now), "about 3 hours ago");
/// assert_eq!(format_distance(now + Duration::days(2), now), "in 2 days");
/// ```
pub fn format_distance(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - from).num_seconds();
    let phrase = distance_phrase(seconds.abs());

    if seconds >= 0 {
        format!("{} ago", phrase)
    } else {
        format!("in {}", phrase)
    }
}

fn distance_phrase(seconds: i64) -> String {
    let minutes = (seconds + 30) / 60;

    match minutes {
        0 => "less than a minute".to_string(),
        1 => "1 minute".to_string(),
        m if m < 45 => format!("{} minutes", m),
        m if m < 90 => "about 1 hour".to_string(),
        m if m < MINUTES_PER_DAY => format!("about {} hours", rounded(m, MINUTES_PER_HOUR)),
        m if m < 2_520 => "1 day".to_string(),
        m if m < MINUTES_PER_MONTH => format!("{} days", rounded(m, MINUTES_PER_DAY)),
        m if m < 2 * MINUTES_PER_MONTH => "about 1 month".to_string(),
        m if m < MINUTES_PER_YEAR => {
            let months = rounded(m, MINUTES_PER_MONTH).min(11);
            if months <= 1 {
                "about 1 month".to_string()
            } else {
                format!("{} months", months)
            }
        }
        m => {
            let years = m / MINUTES_PER_YEAR;
            let leftover_months = (m % MINUTES_PER_YEAR) / MINUTES_PER_MONTH;
            match leftover_months {
                0..=2 => format!("about {}", plural(years, "year")),
                3..=8 => format!("over {}", plural(years, "year")),
                _ => format!("almost {}", plural(years + 1, "year")),
            }
        }
    }
}

fn rounded(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
