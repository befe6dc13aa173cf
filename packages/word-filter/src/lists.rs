//! Built-in word lists
//!
//! Lists are intentionally short; deployments extend them through
//! `WordFilterConfig::extra_words` or a word-list file.

const EN_WORDS: &[&str] = &[
    "arse", "arsehole", "asshole", "bastard", "bitch", "bollocks", "bullshit", "crap",
    "damn", "dick", "dickhead", "fuck", "fucker", "fucking", "motherfucker", "piss",
    "prick", "shit", "shitty", "slut", "twat", "wanker", "whore",
];

const ID_WORDS: &[&str] = &[
    "anjing", "bajingan", "bangsat", "bego", "brengsek", "goblok", "jancuk", "kampret",
    "keparat", "kontol", "memek", "ngentot", "sialan", "tai", "tolol",
];

/// Language codes with a built-in list
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "id"];

/// Get the built-in word list for a language code (case-insensitive)
pub fn builtin_words(language: &str) -> Option<&'static [&'static str]> {
    match language.trim().to_ascii_lowercase().as_str() {
        "en" => Some(EN_WORDS),
        "id" => Some(ID_WORDS),
        _ => None,
    }
}

/// Parse a word-list file body: one word per line, `#` starts a comment
pub fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_words_by_language() {
        assert!(builtin_words("en").unwrap().contains(&"damn"));
        assert!(builtin_words("ID").unwrap().contains(&"bangsat"));
        assert!(builtin_words("fr").is_none());

        for language in SUPPORTED_LANGUAGES {
            assert!(builtin_words(language).is_some());
        }
    }

    #[test]
    fn test_parse_word_list_skips_comments_and_blanks() {
        let words = parse_word_list("# header\nHeck\n\n  darn  # mild\n#only comment\n");
        assert_eq!(words, vec!["heck", "darn"]);
    }
}
