//! Message normalization and associative keys.

/// Number of leading tokens aggregated into an associative key.
pub const KEY_TOKEN_LIMIT: usize = 3;

/// Split a message into normalized tokens.
///
/// The message is lowercased, ASCII punctuation is removed, and the
/// remainder is split on whitespace.
///
/// ```
/// use ar_core::memory::tokenize;
///
/// assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
/// assert!(tokenize("?!...").is_empty());
/// ```
pub fn tokenize(message: &str) -> Vec<String> {
    let normalized: String = message
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    normalized.split_whitespace().map(str::to_string).collect()
}

/// Join the first [`KEY_TOKEN_LIMIT`] tokens with `_`.
///
/// Returns `None` for an empty token list.
pub fn associative_key(tokens: &[String]) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    Some(tokens[..tokens.len().min(KEY_TOKEN_LIMIT)].join("_"))
}
