//! Feed-text preprocessing ahead of location mining.
//!
//! Pure functions; each strips one class of feed noise. [`for_location`]
//! composes the steps that help location extraction while keeping
//! punctuation and emoji, which can carry location context.

use std::sync::LazyLock;

use regex::Regex;

static RE_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());
static RE_MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@(\w+)").unwrap());
static RE_HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").unwrap());
static RE_REPOST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^RT @\w+: ").unwrap());

/// Remove URLs.
pub fn remove_urls(text: &str) -> String {
    RE_URL.replace_all(text, "").into_owned()
}

/// Remove `@mentions`.
pub fn remove_mentions(text: &str) -> String {
    RE_MENTION.replace_all(text, "").into_owned()
}

/// Remove a leading `RT @user: ` repost prefix.
pub fn remove_repost_prefix(text: &str) -> String {
    RE_REPOST.replace(text, "").into_owned()
}

/// `#word` -> `word`.
pub fn unwrap_hashtags(text: &str) -> String {
    RE_HASHTAG.replace_all(text, "$1").into_owned()
}

/// Drop hashtags entirely.
pub fn strip_hashtags(text: &str) -> String {
    RE_HASHTAG.replace_all(text, "").into_owned()
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Hashtag texts, without the `#`.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    RE_HASHTAG
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Mentioned usernames, without the `@`.
pub fn extract_mentions(text: &str) -> Vec<String> {
    RE_MENTION
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Preprocess feed text for location mining.
///
/// Repost prefix, URLs, and mentions go; hashtags are unwrapped so tagged
/// place names stay minable; punctuation and emoji stay.
pub fn for_location(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = remove_repost_prefix(text);
    let text = remove_urls(&text);
    let text = remove_mentions(&text);
    let text = unwrap_hashtags(&text);
    normalize_whitespace(&text)
}
