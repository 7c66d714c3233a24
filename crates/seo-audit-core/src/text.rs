//! Text processing utilities for Japanese article analysis.
//!
//! Provides character counting, sentence and paragraph splitting, kanji
//! counting, case-insensitive matching, and ATX heading extraction for
//! use by the analysis modules.
//!
//! Counting is character-based rather than word-based: Japanese prose has
//! no word boundaries, so "length" always means whitespace-stripped
//! `char` count.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for ATX headings of level 1 or 2 (`# ...` / `## ...`).
static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##?\s+.+$").expect("valid regex"));

/// Regex for level-2 ATX headings (`## ...`).
static H2_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## .+$").expect("valid regex"));

/// Regex for level-3 ATX headings (`### ...`).
static H3_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### .+$").expect("valid regex"));

/// Regex for a level-1 ATX heading with its text captured.
static H1_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# +(.+)$").expect("valid regex"));

/// Regex for paragraph boundaries (two or more consecutive newlines).
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\n+").expect("valid regex"));

/// Count characters with all whitespace removed.
///
/// CJK characters count 1 each; there is no word-boundary splitting.
pub fn stripped_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Split text into paragraphs (separated by one or more blank lines),
/// discarding empty or whitespace-only segments.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Split text into sentences on `。`, `！`, `？`, or a newline,
/// discarding empty or whitespace-only segments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['。', '！', '？', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count characters in the CJK Unified Ideographs range (U+4E00–U+9FAF).
pub fn kanji_count(text: &str) -> usize {
    text.chars()
        .filter(|c| ('\u{4e00}'..='\u{9faf}').contains(c))
        .count()
}

/// Case-insensitive substring test.
///
/// Follows the substring convention that every string contains the empty
/// string, so an empty `needle` always matches.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Count case-insensitive, non-overlapping literal occurrences of
/// `needle` in `haystack`.
///
/// The needle is matched as literal text, never interpreted as a pattern,
/// so regex metacharacters in a keyword cannot change semantics. An empty
/// needle yields 0 (a degenerate match-everywhere count would be useless
/// to score).
pub fn count_occurrences_ci(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .to_lowercase()
        .match_indices(&needle.to_lowercase())
        .count()
}

/// Extract lines that are level-1 or level-2 ATX headings.
pub fn extract_headings(text: &str) -> Vec<&str> {
    HEADING_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Count level-2 ATX heading lines (`## ...`).
pub fn count_h2(text: &str) -> usize {
    H2_PATTERN.find_iter(text).count()
}

/// Count level-3 ATX heading lines (`### ...`).
pub fn count_h3(text: &str) -> usize {
    H3_PATTERN.find_iter(text).count()
}

/// Return the text of the first level-1 ATX heading, if any.
pub fn first_h1(text: &str) -> Option<&str> {
    H1_PATTERN
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}
