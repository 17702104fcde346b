/// Count whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// URL-safe slug: lowercase, every run of characters outside `[a-z0-9]`
/// collapsed to one hyphen, no leading or trailing hyphen.
///
/// Non-ASCII letters are separators, so `"Café Culture"` becomes `"caf-culture"`.
/// The result is empty when the input has no ASCII alphanumerics.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut pending_hyphen = false;
    for c in lower.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// First space-delimited token of `text`, lowercased. Empty when `text` starts with a space.
pub fn first_token_lower(text: &str) -> String {
    text.split(' ').next().unwrap_or_default().to_lowercase()
}

/// Remove all whitespace, e.g. to turn a tag into a hashtag body.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
