//! Commentary Word Filter
//!
//! Masks disallowed words in user-submitted comment content before it is sent
//! to the comments backend.
//!
//! # Features
//!
//! - **Built-in word lists**: Per-language lists (`en`, `id`) selected through config
//! - **Custom word lists**: Extra words from config or a word-list file on disk
//! - **Allow-list**: Words that must never be masked even if a list contains them
//! - **Length-preserving masking**: Each matched word becomes the placeholder
//!   repeated once per character (`"damn"` → `"****"`)
//!
//! # Example
//!
//! ```rust
//! use commentary_word_filter::{WordFilter, WordFilterConfig};
//!
//! let config = WordFilterConfig {
//!     use_user_word_list: false,
//!     ..Default::default()
//! };
//! let filter = WordFilter::new(config).unwrap();
//! assert_eq!(filter.clean("well damn, that was fast"), "well ****, that was fast");
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod lists;

// Re-export main types
pub use config::WordFilterConfig;
pub use error::{Result, WordFilterError};
pub use filter::WordFilter;
