//! Comment Tree Inspector
//!
//! Reads a saved comments API response, builds the comment forest and prints
//! the thread as it would be rendered. Useful for checking how a backend
//! payload with orphans, legacy ids, or stale reply counts ends up on screen.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin comment-tree -- response.json
//!
//! # Show which comments a given reader may edit
//! COMMENT_TREE_VIEWER=ana@example.com cargo run --bin comment-tree -- response.json
//!
//! # Emit display rows as JSON instead of an indented listing
//! COMMENT_TREE_FORMAT=json cargo run --bin comment-tree -- response.json
//! ```
//!
//! Accepted payload shapes: `{"comments": [...]}`, `{"data": {"comments": [...]}}`
//! or a bare array of comments.
//!
//! # Environment Variables
//!
//! - `COMMENT_TREE_VIEWER`: Viewer email used for ownership markers
//! - `COMMENT_TREE_FORMAT`: `text` (default) or `json`
//! - `COMMENT_TREE_CLEAN`: Mask profanity in displayed content when set to `1`
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::env;

use anyhow::{anyhow, Context};
use commentary_core::models::CommentRecord;
use commentary_core::tree::{build_tree, count_all, count_roots, max_depth, CommentForest};
use commentary_core::view::{project_thread, CommentView};
use commentary_word_filter::{WordFilter, WordFilterConfig};
use serde_json::Value;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("Usage: comment-tree <response.json>"))?;

    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path))?;
    let payload: Value =
        serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path))?;

    let records = extract_comments(payload)?;
    tracing::info!("Read {} comment records from {}", records.len(), path);

    let forest = build_tree(records);
    tracing::info!("{}", thread_summary(&forest));

    let viewer = env::var("COMMENT_TREE_VIEWER").ok();
    let mut rows = project_thread(&forest, viewer.as_deref(), chrono::Utc::now());

    if env::var("COMMENT_TREE_CLEAN").is_ok_and(|value| value == "1") {
        let filter = WordFilter::new(WordFilterConfig::default())?;
        for row in &mut rows {
            row.content = filter.clean(&row.content);
        }
    }

    match env::var("COMMENT_TREE_FORMAT").as_deref() {
        Ok("json") => println!("{}", serde_json::to_string_pretty(&rows)?),
        Ok("text") | Err(_) => print_thread(&rows, count_roots(&forest)),
        Ok(other) => return Err(anyhow!("Unknown COMMENT_TREE_FORMAT '{}'", other)),
    }

    Ok(())
}

/// One-line overview: roots, total comments, and nesting levels (0 when empty)
fn thread_summary(forest: &CommentForest) -> String {
    format!(
        "Thread has {} top-level comments, {} total, {} levels",
        count_roots(forest),
        count_all(forest),
        max_depth(forest).map_or(0, |depth| depth + 1)
    )
}

/// Pull the comment list out of any of the known response envelopes
fn extract_comments(payload: Value) -> anyhow::Result<Vec<CommentRecord>> {
    let list = match payload {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut object) => {
            if let Some(comments) = object.remove("comments") {
                comments
            } else if let Some(Value::Object(mut data)) = object.remove("data") {
                data.remove("comments")
                    .ok_or_else(|| anyhow!("Response has no data.comments field"))?
            } else {
                return Err(anyhow!("Response has no comments field"));
            }
        }
        _ => return Err(anyhow!("Expected a JSON object or array of comments")),
    };

    if list.is_null() {
        return Ok(Vec::new());
    }

    serde_json::from_value(list).context("Comment list does not match the comment format")
}

fn print_thread(rows: &[CommentView], root_count: usize) {
    println!("Comments ({})", root_count);
    println!();

    for row in rows {
        let indent = "    ".repeat(row.depth);
        let mut header = format!("{}{}", indent, row.author_name);
        if let Some(posted) = &row.posted {
            header.push_str(&format!(" · {}", posted));
        }
        if row.is_edited {
            header.push_str(" (edited)");
        }
        if row.is_owner {
            header.push_str(" [yours]");
        }
        header.push_str(&format!("  #{}", row.id));

        println!("{}", header);
        for line in row.content.lines() {
            println!("{}  {}", indent, line);
        }
        if row.reply_count > 0 {
            println!("{}  {} replies", indent, row.reply_count);
        }
        println!();
    }
}
