//! Error types for the word filter
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordFilterError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Unknown word list language: {0}")]
    UnknownLanguage(String),

    #[error("Word list file not found at path: {0}")]
    WordListNotFound(String),

    #[error("Failed to compile word pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WordFilterError>;
