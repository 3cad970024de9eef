use memchr::memchr_iter;
use regex::Regex;
use std::sync::OnceLock;

static WHITESPACE: OnceLock<Regex> = OnceLock::new();

/// Splits text into lines on `\n` only. A trailing separator yields a
/// trailing empty line, and `\r` stays part of the line content.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut last_pos = 0;

    for nl_pos in memchr_iter(b'\n', bytes) {
        lines.push(&text[last_pos..nl_pos]);
        last_pos = nl_pos + 1;
    }
    lines.push(&text[last_pos..]);

    lines
}

/// Whitespace-delimited tokens, with empty tokens from leading or
/// consecutive whitespace dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid pattern"));
    whitespace
        .split(text)
        .filter(|token| !token.is_empty())
        .collect()
}
