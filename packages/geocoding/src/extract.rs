//! Location extraction: derive one raw location string from a post.
//!
//! Signals are tried in strict priority order, each short-circuiting the
//! rest: explicit coordinates, platform place tag, profile location field,
//! profile biography mention, body-text mention. Text mining is pure and
//! deterministic: phrase-pattern matches come first (pattern priority, then
//! position in text), then gazetteer matches by position, deduplicated
//! preserving first insertion.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

use crate::clean;
use crate::gazetteer;
use crate::types::{Post, UserProfile};

/// Phrase prepositions, in priority order.
const PREPOSITIONS: &[&str] = &[
    "in",
    "from",
    "at",
    "near",
    "to",
    "visiting",
    "live in",
    "based in",
    "located in",
];

// "<preposition> <Capitalized Phrase>", e.g. "in New York", "from Chicago".
static PHRASE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PREPOSITIONS
        .iter()
        .map(|prep| Regex::new(&format!(r"\b{} ([A-Z][a-z]+ ?[A-Z]?[a-z]*)", prep)).unwrap())
        .collect()
});

/// Find every candidate location mention in free text, in deterministic
/// order. Ignore-listed terms are silently excluded.
pub fn find_locations_in_text(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut found: IndexSet<String> = IndexSet::new();

    for pattern in PHRASE_PATTERNS.iter() {
        for cap in pattern.captures_iter(text) {
            let candidate = cap[1].to_string();
            if !gazetteer::is_ignored(&candidate) {
                found.insert(candidate);
            }
        }
    }

    // Bare gazetteer mentions, ordered by position in the text.
    let mut mentions: Vec<(usize, String)> = Vec::new();
    for place in gazetteer::PLACES {
        if gazetteer::is_ignored(place) {
            continue;
        }
        if let Some(pos) = find_ascii_case_insensitive(text, place) {
            mentions.push((pos, text[pos..pos + place.len()].to_string()));
        }
    }
    mentions.sort_by_key(|(pos, _)| *pos);
    for (_, mention) in mentions {
        found.insert(mention);
    }

    found.into_iter().collect()
}

/// First candidate in the deterministic order, if any.
pub fn first_location_in_text(text: &str) -> Option<String> {
    find_locations_in_text(text).into_iter().next()
}

/// Extract from the author profile: the location field wins over the bio.
pub fn from_profile(user: &UserProfile) -> Option<String> {
    if let Some(location) = &user.location {
        let trimmed = location.trim();
        if !trimmed.is_empty() && !gazetteer::is_ignored(trimmed) {
            return Some(trimmed.to_string());
        }
    }

    if let Some(description) = &user.description {
        let cleaned = clean::for_location(description);
        if let Some(candidate) = first_location_in_text(&cleaned) {
            return Some(candidate);
        }
    }

    None
}

/// Derive the single best raw location string for a post.
///
/// Explicit coordinates bypass the gazetteer and ignore-list checks
/// entirely; exhausting every signal yields `None`, not an error.
pub fn from_post(post: &Post) -> Option<String> {
    if let Some(geo) = &post.geo {
        if let Some([lat, lon]) = geo.coordinates {
            return Some(format!("{},{}", lat, lon));
        }
    }

    if let Some(place) = &post.place {
        if let Some(full_name) = &place.full_name {
            if !full_name.is_empty() {
                return Some(full_name.clone());
            }
        }
    }

    if let Some(user) = &post.user {
        if let Some(candidate) = from_profile(user) {
            return Some(candidate);
        }
    }

    let cleaned = clean::for_location(&post.text);
    first_location_in_text(&cleaned)
}

// Byte offset of the first ASCII-case-insensitive occurrence of `needle`.
// Gazetteer entries are ASCII, so a match always lands on char boundaries.
fn find_ascii_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
