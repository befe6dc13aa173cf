//! Word filter that masks disallowed words
//!
//! Matching is case-insensitive and on whole words only, so "class" is left
//! alone even when "ass" is listed. A matched word is replaced by the configured
//! placeholder repeated once per character, keeping the text length stable.
use crate::config::WordFilterConfig;
use crate::error::{Result, WordFilterError};
use crate::lists::{builtin_words, parse_word_list};
use regex::{Captures, Regex};
use std::collections::BTreeSet;

/// Masks disallowed words in free text
#[derive(Debug, Clone)]
pub struct WordFilter {
    placeholder: char,
    words: BTreeSet<String>,
    allowed: BTreeSet<String>,
    /// `None` when the effective word set is empty
    pattern: Option<Regex>,
}

impl WordFilter {
    /// Create a filter from configuration
    ///
    /// Loads the built-in lists for each configured language, the extra words,
    /// and the word-list file returned by
    /// [`WordFilterConfig::resolve_word_list_path`].
    ///
    /// # Errors
    ///
    /// - `ConfigError` if the configuration does not validate
    /// - `UnknownLanguage` if a language has no built-in list
    /// - `WordListNotFound` if an explicit word-list file is missing
    pub fn new(config: WordFilterConfig) -> Result<Self> {
        config.validate().map_err(WordFilterError::ConfigError)?;

        let mut words = BTreeSet::new();
        for language in &config.languages {
            let list = builtin_words(language)
                .ok_or_else(|| WordFilterError::UnknownLanguage(language.clone()))?;
            words.extend(list.iter().map(|word| word.to_string()));
        }

        words.extend(config.extra_words.iter().map(|word| word.trim().to_lowercase()));

        if let Some(path) = config.resolve_word_list_path() {
            if !path.exists() {
                return Err(WordFilterError::WordListNotFound(
                    path.display().to_string(),
                ));
            }
            let contents = std::fs::read_to_string(&path)?;
            let loaded = parse_word_list(&contents);
            tracing::debug!("Loaded {} words from {}", loaded.len(), path.display());
            words.extend(loaded);
        }

        let allowed = config
            .allowed_words
            .iter()
            .map(|word| word.trim().to_lowercase())
            .collect();

        let mut filter = Self {
            placeholder: config.placeholder,
            words,
            allowed,
            pattern: None,
        };
        filter.rebuild_pattern()?;
        Ok(filter)
    }

    /// Replace every disallowed word in `text` with placeholders
    pub fn clean(&self, text: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern
                .replace_all(text, |caps: &Captures| {
                    let count = caps[0].chars().count();
                    std::iter::repeat(self.placeholder)
                        .take(count)
                        .collect::<String>()
                })
                .into_owned(),
            None => text.to_string(),
        }
    }

    /// Check whether `text` contains at least one disallowed word
    pub fn is_profane(&self, text: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(text))
    }

    /// Add words to the filter
    pub fn add_words<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty()),
        );
        self.rebuild_pattern()
    }

    /// Exempt words from masking
    pub fn allow_words<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed.extend(
            words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase()),
        );
        self.rebuild_pattern()
    }

    /// Number of words currently masked
    pub fn word_count(&self) -> usize {
        self.words.difference(&self.allowed).count()
    }

    fn rebuild_pattern(&mut self) -> Result<()> {
        let mut active: Vec<&String> = self.words.difference(&self.allowed).collect();
        if active.is_empty() {
            self.pattern = None;
            return Ok(());
        }

        // Longest first so "fucking" wins over "fuck" inside the alternation
        active.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = active
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");

        self.pattern = Some(Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))?);
        Ok(())
    }
}
