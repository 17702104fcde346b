use serde::{Deserialize, Serialize};

use crate::tokenization::strip_whitespace;
use crate::types::PostDraft;

/// Hashtags per social post.
pub const MAX_HASHTAGS: usize = 3;

/// Ready-to-paste social network previews of a post.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialContent {
    /// Short-form network post.
    pub short_form: String,
    /// Professional network post, with a line pointing to the category.
    pub professional: String,
    /// Generic share text.
    pub share_text: String,
}

pub fn derive_social_content(post: &PostDraft) -> SocialContent {
    let tags = hashtags(&post.tags);
    let excerpt = post.excerpt_text().unwrap_or("");
    let category_line = format!(
        "Read more about {} on our blog.",
        post.category.to_lowercase()
    );

    SocialContent {
        short_form: join_segments(&[&post.title, excerpt, &tags]),
        professional: join_segments(&[&post.title, excerpt, &category_line, &tags]),
        share_text: join_segments(&[&post.title, excerpt, &tags]),
    }
}

/// `#Tag` tokens for the first three tags, whitespace removed, space-joined.
/// Tags that are nothing but whitespace yield no token.
pub fn hashtags(tags: &[String]) -> String {
    tags.iter()
        .take(MAX_HASHTAGS)
        .map(|t| strip_whitespace(t))
        .filter(|t| !t.is_empty())
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_segments(segments: &[&str]) -> String {
    segments
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n\n")
}
