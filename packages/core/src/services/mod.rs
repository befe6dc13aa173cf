//! Thread Services
//!
//! This module connects the comment tree engine to the outside world:
//!
//! - `CommentThread` - Holds an article's forest and applies backend-confirmed changes
//! - `CommentTransport` - Contract for the remote comments service
//! - `ThreadEvent` - Change notifications for the presentation layer
//!
//! The thread only mutates its forest after the transport reports success,
//! so a failed call never leaves the displayed thread half-changed.

pub mod comment_thread;
pub mod error;
pub mod events;
pub mod transport;

pub use comment_thread::CommentThread;
pub use error::{CommentServiceError, TransportError};
pub use events::ThreadEvent;
pub use transport::CommentTransport;
