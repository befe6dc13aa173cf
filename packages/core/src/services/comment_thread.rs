//! Comment Thread Service
//!
//! Holds one article's comment forest for the lifetime of a page view and
//! keeps it in step with the comments backend.
//!
//! # Flow
//!
//! Every change follows the same order:
//!
//! 1. Validate and sanitize the content (create/edit only)
//! 2. Call the transport; on failure return the error, tree untouched
//! 3. Apply exactly one local tree mutation matching the operation
//! 4. Publish a [`ThreadEvent`]
//!
//! There is no re-fetch after a change and no version check: the last
//! successful response wins.
//!
//! # Disposal
//!
//! [`CommentThread::dispose`] marks the thread as torn down. A transport call
//! that was already in flight still completes, but its response is dropped
//! without touching the forest and the call returns
//! [`CommentServiceError::ThreadDisposed`].

use crate::config::CommentThreadConfig;
use crate::models::{CommentRecord, CommentUpdate};
use crate::sanitizer::ContentSanitizer;
use crate::services::error::CommentServiceError;
use crate::services::events::ThreadEvent;
use crate::services::transport::CommentTransport;
use crate::tree::{
    build_tree, count_all, count_roots, delete_node, insert_reply, resolve_id, update_record,
    CommentForest, MutationOutcome, TreeMutation,
};
use crate::view::{project_thread, CommentView};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// One article's comment thread
pub struct CommentThread {
    article_id: String,

    transport: Arc<dyn CommentTransport>,

    sanitizer: Arc<dyn ContentSanitizer>,

    config: CommentThreadConfig,

    /// Current forest, replaced wholesale on load and after each mutation
    forest: Arc<RwLock<CommentForest>>,

    /// Set once the owning view is torn down
    disposed: Arc<AtomicBool>,

    events: broadcast::Sender<ThreadEvent>,
}

impl CommentThread {
    /// Create an empty thread for `article_id`
    ///
    /// The thread starts with no comments; call [`load`](Self::load) to fetch them.
    ///
    /// # Errors
    ///
    /// Returns `CommentServiceError::InvalidConfig` if `config` does not validate.
    pub fn new(
        article_id: impl Into<String>,
        transport: Arc<dyn CommentTransport>,
        sanitizer: Arc<dyn ContentSanitizer>,
        config: CommentThreadConfig,
    ) -> Result<Self, CommentServiceError> {
        config
            .validate()
            .map_err(CommentServiceError::invalid_config)?;

        let (events, _) = broadcast::channel(config.event_capacity);

        Ok(Self {
            article_id: article_id.into(),
            transport,
            sanitizer,
            config,
            forest: Arc::new(RwLock::new(CommentForest::new())),
            disposed: Arc::new(AtomicBool::new(false)),
            events,
        })
    }

    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    /// Subscribe to change events
    pub fn subscribe(&self) -> broadcast::Receiver<ThreadEvent> {
        self.events.subscribe()
    }

    /// Copy of the current forest
    pub async fn snapshot(&self) -> CommentForest {
        self.forest.read().await.clone()
    }

    /// Number of top-level comments, for the thread header
    pub async fn root_count(&self) -> usize {
        count_roots(&*self.forest.read().await)
    }

    /// Display rows for `viewer_email`
    pub async fn view(&self, viewer_email: Option<&str>, now: DateTime<Utc>) -> Vec<CommentView> {
        project_thread(&*self.forest.read().await, viewer_email, now)
    }

    /// Mark the thread as torn down; later responses are dropped
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Fetch the article's comments and replace the forest
    ///
    /// Returns the number of top-level comments.
    pub async fn load(&self) -> Result<usize, CommentServiceError> {
        self.ensure_live()?;

        let records = self.transport.fetch_comments(&self.article_id).await?;
        let received = records.len();
        let fresh = build_tree(records);
        let root_count = count_roots(&fresh);
        let total_count = count_all(&fresh);

        {
            let mut forest = self.forest.write().await;
            self.ensure_live()?;
            *forest = fresh;
        }

        tracing::info!(
            "Loaded {} comments for article '{}' ({} top-level, {} in thread)",
            received,
            self.article_id,
            root_count,
            total_count
        );

        self.publish(ThreadEvent::Loaded {
            article_id: self.article_id.clone(),
            root_count,
            total_count,
        });

        Ok(root_count)
    }

    /// Post a comment, or a reply when `parent_id` is set
    ///
    /// Returns the record created by the backend. If the parent disappeared
    /// from the local thread while the request was in flight, the reply is
    /// kept on the backend but not shown until the next load. If a concurrent
    /// [`load`](Self::load) already picked the new comment up, it is not added twice.
    pub async fn add_comment(
        &self,
        content: &str,
        parent_id: Option<&str>,
    ) -> Result<CommentRecord, CommentServiceError> {
        self.ensure_live()?;
        let content = self.prepare_content(content)?;

        let created = self
            .transport
            .create_comment(&self.article_id, &content, parent_id)
            .await?;
        let comment_id = resolve_id(&created)?;

        let reply = created.clone();
        let outcome = self
            .apply(move |forest| insert_reply(forest, parent_id, reply))
            .await?;

        match outcome {
            MutationOutcome::Applied => self.publish(ThreadEvent::CommentAdded {
                comment_id,
                parent_id: parent_id.map(str::to_string),
            }),
            MutationOutcome::TargetNotFound => tracing::debug!(
                "Comment '{}' created but parent '{}' is no longer in the thread",
                comment_id,
                parent_id.unwrap_or_default()
            ),
            MutationOutcome::AlreadyPresent => tracing::debug!(
                "Comment '{}' created but a reload already added it to the thread",
                comment_id
            ),
        }

        Ok(created)
    }

    /// Replace a comment's content
    ///
    /// The comment is marked as edited even if the backend response omits the flag.
    pub async fn edit_comment(
        &self,
        comment_id: &str,
        content: &str,
    ) -> Result<CommentRecord, CommentServiceError> {
        self.ensure_live()?;
        let content = self.prepare_content(content)?;

        let updated = self.transport.update_comment(comment_id, &content).await?;

        let mut update = CommentUpdate::from_record(&updated).mark_edited();
        if updated.content.is_empty() {
            update.content = Some(content);
        }

        let outcome = self
            .apply(|forest| update_record(forest, comment_id, update))
            .await?;

        if outcome == MutationOutcome::Applied {
            self.publish(ThreadEvent::CommentEdited {
                comment_id: comment_id.to_string(),
            });
        }

        Ok(updated)
    }

    /// Delete a comment together with all of its replies
    pub async fn delete_comment(&self, comment_id: &str) -> Result<(), CommentServiceError> {
        self.ensure_live()?;

        if !self.transport.delete_comment(comment_id).await? {
            return Err(CommentServiceError::delete_rejected(comment_id));
        }

        let outcome = self
            .apply(|forest| delete_node(forest, comment_id))
            .await?;

        if outcome == MutationOutcome::Applied {
            self.publish(ThreadEvent::CommentDeleted {
                comment_id: comment_id.to_string(),
            });
        }

        Ok(())
    }

    /// Validate length and emptiness, then sanitize
    fn prepare_content(&self, content: &str) -> Result<String, CommentServiceError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(CommentServiceError::EmptyContent);
        }

        let length = trimmed.chars().count();
        if length > self.config.max_content_length {
            return Err(CommentServiceError::content_too_long(
                self.config.max_content_length,
                length,
            ));
        }

        if self.config.sanitize_on_submit {
            Ok(self.sanitizer.sanitize(trimmed))
        } else {
            Ok(trimmed.to_string())
        }
    }

    /// Run one mutation against the current forest under the write lock
    async fn apply<F>(&self, mutate: F) -> Result<MutationOutcome, CommentServiceError>
    where
        F: FnOnce(CommentForest) -> TreeMutation,
    {
        let mut forest = self.forest.write().await;
        self.ensure_live()?;

        let mutation = mutate(std::mem::take(&mut *forest));
        *forest = mutation.forest;
        Ok(mutation.outcome)
    }

    fn ensure_live(&self) -> Result<(), CommentServiceError> {
        if self.is_disposed() {
            tracing::debug!(
                "Dropping comment response for disposed thread '{}'",
                self.article_id
            );
            return Err(CommentServiceError::ThreadDisposed);
        }
        Ok(())
    }

    fn publish(&self, event: ThreadEvent) {
        // No subscribers is fine; the event is simply dropped
        let _ = self.events.send(event);
    }
}
