//! Configuration for comment threads
use serde::{Deserialize, Serialize};

/// Upper bound for `max_content_length`, far above any sensible comment size
const MAX_SUPPORTED_CONTENT_LENGTH: usize = 20_000;

/// Configuration for [`CommentThread`](crate::services::CommentThread)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentThreadConfig {
    /// Maximum comment length in characters, checked before sanitizing
    pub max_content_length: usize,

    /// Run content through the sanitizer before create/update
    pub sanitize_on_submit: bool,

    /// Capacity of the thread event broadcast channel
    pub event_capacity: usize,
}

impl Default for CommentThreadConfig {
    fn default() -> Self {
        Self {
            max_content_length: 500,
            sanitize_on_submit: true,
            event_capacity: 64,
        }
    }
}

impl CommentThreadConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_content_length == 0 {
            return Err("max_content_length must be greater than 0".to_string());
        }

        if self.max_content_length > MAX_SUPPORTED_CONTENT_LENGTH {
            return Err(format!(
                "max_content_length cannot exceed {}",
                MAX_SUPPORTED_CONTENT_LENGTH
            ));
        }

        if self.event_capacity == 0 {
            return Err("event_capacity must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CommentThreadConfig::default();
        assert_eq!(config.max_content_length, 500);
        assert!(config.sanitize_on_submit);
        assert_eq!(config.event_capacity, 64);
    }

    #[test]
    fn test_config_validation() {
        let mut config = CommentThreadConfig::default();

        // Valid config
        assert!(config.validate().is_ok());

        // Invalid: zero length
        config.max_content_length = 0;
        assert!(config.validate().is_err());

        // Invalid: excessive length
        config.max_content_length = 50_000;
        assert!(config.validate().is_err());

        // Invalid: zero event capacity
        config.max_content_length = 500;
        config.event_capacity = 0;
        assert!(config.validate().is_err());
    }
}
