use regex::Regex;
use std::sync::LazyLock;

static EXTRA_DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Trim dashes from both ends, then collapse every run of dashes to one.
pub fn cleanup(text: &str) -> String {
    let trimmed = text.trim_matches('-');
    EXTRA_DASHES.replace_all(trimmed, "-").into_owned()
}
