//! Configuration for the word filter
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the user word list inside `~/.commentary/wordlists/`
const DEFAULT_WORD_LIST_FILE: &str = "custom.txt";

/// Configuration for [`WordFilter`](crate::WordFilter)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordFilterConfig {
    /// Character written once per character of a masked word
    pub placeholder: char,

    /// Built-in word lists to load, by language code (e.g. "en", "id")
    pub languages: Vec<String>,

    /// Additional words to mask on top of the built-in lists
    pub extra_words: Vec<String>,

    /// Words that are never masked, even if a list contains them
    pub allowed_words: Vec<String>,

    /// Word-list file (one word per line, `#` starts a comment)
    pub word_list_path: Option<PathBuf>,

    /// Fall back to the shared user word list when `word_list_path` is unset
    pub use_user_word_list: bool,
}

impl Default for WordFilterConfig {
    fn default() -> Self {
        Self {
            placeholder: '*',
            languages: vec!["id".to_string(), "en".to_string()],
            extra_words: Vec::new(),
            allowed_words: Vec::new(),
            word_list_path: None,
            use_user_word_list: true,
        }
    }
}

impl WordFilterConfig {
    /// Get the word-list file to load, if any
    ///
    /// An explicit `word_list_path` is always returned, even if it does not exist,
    /// so that the filter can report the missing file. Without one, and unless
    /// `use_user_word_list` is off, the shared location is used when present:
    /// - macOS/Linux: ~/.commentary/wordlists/custom.txt
    /// - Windows: %USERPROFILE%\.commentary\wordlists\custom.txt
    pub fn resolve_word_list_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.word_list_path {
            return Some(path.clone());
        }

        if !self.use_user_word_list {
            return None;
        }

        let default_path = dirs::home_dir()?
            .join(".commentary")
            .join("wordlists")
            .join(DEFAULT_WORD_LIST_FILE);

        default_path.exists().then_some(default_path)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.placeholder.is_whitespace() || self.placeholder.is_control() {
            return Err("placeholder must be a visible character".to_string());
        }

        if let Some(word) = self
            .extra_words
            .iter()
            .chain(self.allowed_words.iter())
            .find(|word| word.trim().is_empty())
        {
            return Err(format!("word lists cannot contain blank entries ({:?})", word));
        }

        if self.languages.iter().any(|lang| lang.trim().is_empty()) {
            return Err("language codes cannot be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WordFilterConfig::default();
        assert_eq!(config.placeholder, '*');
        assert_eq!(config.languages, vec!["id", "en"]);
        assert!(config.extra_words.is_empty());
        assert!(config.word_list_path.is_none());
        assert!(config.use_user_word_list);
    }

    #[test]
    fn test_config_validation() {
        let mut config = WordFilterConfig::default();

        // Valid config
        assert!(config.validate().is_ok());

        // Invalid: whitespace placeholder
        config.placeholder = ' ';
        assert!(config.validate().is_err());

        // Invalid: blank extra word
        config.placeholder = '#';
        config.extra_words = vec!["   ".to_string()];
        assert!(config.validate().is_err());

        // Invalid: empty language code
        config.extra_words.clear();
        config.languages = vec![String::new()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_word_list_path_is_returned() {
        let config = WordFilterConfig {
            word_list_path: Some(PathBuf::from("/definitely/missing/words.txt")),
            ..Default::default()
        };

        assert_eq!(
            config.resolve_word_list_path(),
            Some(PathBuf::from("/definitely/missing/words.txt"))
        );
    }

    #[test]
    fn test_user_word_list_lookup_can_be_disabled() {
        let config = WordFilterConfig {
            use_user_word_list: false,
            ..Default::default()
        };
        assert_eq!(config.resolve_word_list_path(), None);

        // An explicit path still wins
        let explicit = WordFilterConfig {
            word_list_path: Some(PathBuf::from("/tmp/words.txt")),
            use_user_word_list: false,
            ..Default::default()
        };
        assert_eq!(
            explicit.resolve_word_list_path(),
            Some(PathBuf::from("/tmp/words.txt"))
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: WordFilterConfig =
            serde_json::from_str(r##"{"placeholder": "#", "extra_words": ["heck"]}"##).unwrap();
        assert_eq!(config.placeholder, '#');
        assert_eq!(config.languages, vec!["id", "en"]);
    }
}
