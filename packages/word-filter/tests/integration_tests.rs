//! Integration tests for word-list file loading
use commentary_word_filter::{WordFilter, WordFilterConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn word_list_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_word_list_file_extends_builtin_lists() {
    let file = word_list_file("# site specific\nspoiler\nclickbait  # headline words\n");
    let config = WordFilterConfig {
        word_list_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    let filter = WordFilter::new(config).unwrap();

    assert_eq!(
        filter.clean("Spoiler: this clickbait is crap"),
        "*******: this ********* is ****"
    );
}

#[test]
fn test_word_list_file_only() {
    let file = word_list_file("lorem\n");
    let config = WordFilterConfig {
        languages: Vec::new(),
        word_list_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    let filter = WordFilter::new(config).unwrap();

    assert_eq!(filter.word_count(), 1);
    assert_eq!(filter.clean("lorem ipsum damn"), "***** ipsum damn");
}

#[test]
fn test_allow_list_overrides_word_list_file() {
    let file = word_list_file("ipsum\nlorem\n");
    let config = WordFilterConfig {
        languages: Vec::new(),
        allowed_words: vec!["Lorem".to_string()],
        word_list_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    let filter = WordFilter::new(config).unwrap();

    assert!(filter.is_profane("lorem ipsum"));
    assert_eq!(filter.clean("lorem ipsum"), "lorem *****");
}
