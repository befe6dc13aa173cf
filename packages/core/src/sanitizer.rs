//! Content Sanitizer Boundary
//!
//! New and edited comment text passes through a [`ContentSanitizer`] exactly
//! once before it is sent to the backend. The engine treats sanitizing as a
//! pure, total `&str -> String` transform and never applies filtering rules
//! itself.

use commentary_word_filter::WordFilter;

/// Pure text transform applied to comment content before submission
pub trait ContentSanitizer: Send + Sync {
    fn sanitize(&self, text: &str) -> String;
}

impl ContentSanitizer for WordFilter {
    fn sanitize(&self, text: &str) -> String {
        self.clean(text)
    }
}

/// Adapts a plain function or closure into a [`ContentSanitizer`]
pub struct FnSanitizer<F>(pub F);

impl<F> ContentSanitizer for FnSanitizer<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn sanitize(&self, text: &str) -> String {
        (self.0)(text)
    }
}

/// Sanitizer that returns text unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSanitizer;

impl ContentSanitizer for NoopSanitizer {
    fn sanitize(&self, text: &str) -> String {
        text.to_string()
    }
}
