//! Plain-text extraction from rich-text post content.
//!
//! Best effort only: anything between `<` and the next `>` is dropped. Good
//! enough for excerpts and word counts, never for sanitizing markup.

use crate::normalization::truncate_with_ellipsis;

/// Remove every `<...>` span. A `<` with no closing `>` is kept as text.
pub fn strip_markup(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut pending: Option<usize> = None;
    for (idx, c) in s.char_indices() {
        match (c, pending) {
            ('<', None) => pending = Some(idx),
            ('>', Some(_)) => pending = None,
            (_, None) => result.push(c),
            _ => {}
        }
    }
    if let Some(start) = pending {
        result.push_str(&s[start..]);
    }
    result
}

/// Markup-free, trimmed text of `content`.
pub fn plain_text(content: &str) -> String {
    strip_markup(content).trim().to_string()
}

/// Description candidate taken from post content, clamped to `max_chars`.
/// Returns `None` when nothing but markup and whitespace is left.
pub fn description_from_content(content: &str, max_chars: usize) -> Option<String> {
    let text = plain_text(content);
    if text.is_empty() {
        None
    } else {
        Some(truncate_with_ellipsis(&text, max_chars))
    }
}
