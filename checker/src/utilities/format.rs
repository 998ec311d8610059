//! Formatting helpers for verdict messages.

/// Tokens longer than this are shortened before they are quoted in a message.
const COMPRESS_LIMIT: usize = 64;
/// Characters kept from each end of a compressed token.
const COMPRESS_KEEP: usize = 30;

/// Shortens `text` to `first 30 ... last 30` characters when it is longer than 64.
pub fn compress(text: &str) -> String {
    let len = text.chars().count();
    if len <= COMPRESS_LIMIT {
        return text.to_string();
    }
    let head: String = text.chars().take(COMPRESS_KEEP).collect();
    let tail: String = text.chars().skip(len - COMPRESS_KEEP).collect();
    format!("{head}...{tail}")
}

/// English ordinal suffix for `n`: `st`, `nd`, `rd` or `th`.
pub fn english_ending(n: usize) -> &'static str {
    if n / 10 % 10 == 1 {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
