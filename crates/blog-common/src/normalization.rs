use unicode_normalization::UnicodeNormalization;

/// Marker appended to text cut short by [`truncate_with_ellipsis`].
pub const ELLIPSIS: &str = "...";

/// Normalize text: trim, collapse whitespace runs to a single space, Unicode NFC, BOM removal.
pub fn normalize_text(text: &str) -> String {
    let no_bom = text.replace('\u{FEFF}', "");
    let nfc: String = no_bom.nfc().collect();
    let mut result = String::with_capacity(nfc.len());
    let mut prev_space = false;
    for c in nfc.chars() {
        if c.is_whitespace() {
            if !prev_space {
                result.push(' ');
                prev_space = true;
            }
        } else {
            result.push(c);
            prev_space = false;
        }
    }
    result.trim().to_string()
}

/// Case-folded NFC form used for case-insensitive comparisons.
pub fn fold_case(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Length in characters (Unicode scalar values), which is what every length rule counts.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Longest prefix of `s` holding at most `max_chars` characters.
pub fn truncate_to_chars(s: &str, max_chars: usize) -> &str {
    let byte_idx = s
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len());
    &s[..byte_idx]
}

/// Clamp `s` to `max_chars`: longer input keeps its first `max_chars - 3`
/// characters followed by [`ELLIPSIS`], so the result is exactly `max_chars` long.
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    if char_len(s) <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    format!("{}{}", truncate_to_chars(s, keep), ELLIPSIS)
}
