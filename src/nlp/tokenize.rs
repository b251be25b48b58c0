use std::sync::LazyLock;

use regex::Regex;

/// Runs of Devanagari codepoints or ASCII word characters.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{0900}-\u{097F}0-9A-Za-z_]+").expect("Invalid token regex pattern")
});

/// Lowercase and trim raw input before tokenizing or pattern matching.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Split normalized text into word tokens, left to right.
///
/// Punctuation and whitespace are discarded. Empty input gives no tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}
