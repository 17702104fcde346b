//! SEO metadata derivation from a post's authoring fields.
//!
//! Every rule here is total: missing optional fields fall back to documented
//! defaults instead of failing. Lengths count characters, not bytes.

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;
use crate::extraction::description_from_content;
use crate::normalization::truncate_with_ellipsis;
use crate::structured_data::{build_article_schema, SchemaFields};
use crate::tokenization::{first_token_lower, slugify, word_count};
use crate::types::{Article, PostDraft, SeoMetadata};

pub const SEO_TITLE_MAX_CHARS: usize = 60;
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;
pub const WORDS_PER_MINUTE: usize = 200;
/// Read time reported for a post without content.
pub const DEFAULT_READ_TIME_MINUTES: u32 = 5;
/// Slug used when neither the title nor the article id has an ASCII alphanumeric.
pub const FALLBACK_SLUG: &str = "post";

const FIXED_KEYWORDS: [&str; 2] = ["blog", "article"];

/// Derive metadata, using the current time when the post has no publish date.
pub fn derive_metadata(post: &PostDraft, site: &SiteConfig) -> SeoMetadata {
    derive_metadata_at(post, site, Utc::now())
}

/// Derive metadata with an explicit fallback publish time.
pub fn derive_metadata_at(post: &PostDraft, site: &SiteConfig, now: DateTime<Utc>) -> SeoMetadata {
    let slug = slug_or(&post.title, FALLBACK_SLUG);
    assemble(post, site, now, slug)
}

/// Derive metadata for a stored article. An empty title slug falls back to the article id.
pub fn derive_metadata_for(article: &Article, site: &SiteConfig) -> SeoMetadata {
    let id_slug = slug_or(&article.id, FALLBACK_SLUG);
    let slug = slug_or(&article.title, &id_slug);
    assemble(&PostDraft::from(article), site, article.publish_date, slug)
}

fn assemble(post: &PostDraft, site: &SiteConfig, now: DateTime<Utc>, slug: String) -> SeoMetadata {
    let seo_title = seo_title(&post.title);
    let meta_description = meta_description(post, site);
    let structured_data = build_article_schema(
        &SchemaFields {
            headline: &seo_title,
            description: &meta_description,
            author_name: &post.author_name,
            category: &post.category,
            tags: &post.tags,
            published: post.publish_date.unwrap_or(now),
        },
        site,
    );

    SeoMetadata {
        canonical_url: site.article_url(&slug),
        estimated_read_time: estimate_read_time(post.content_text()),
        keywords: keywords(post),
        seo_title,
        meta_description,
        slug,
        structured_data,
    }
}

/// Titles over 60 characters keep 57 and gain `...`.
pub fn seo_title(title: &str) -> String {
    truncate_with_ellipsis(title, SEO_TITLE_MAX_CHARS)
}

/// Excerpt, else markup-stripped content, else a sentence built from title and
/// category; always clamped to 160 characters.
pub fn meta_description(post: &PostDraft, site: &SiteConfig) -> String {
    truncate_with_ellipsis(&description_source(post, site), META_DESCRIPTION_MAX_CHARS)
}

/// The description before the final clamp. Content-derived text is already clamped.
pub fn description_source(post: &PostDraft, site: &SiteConfig) -> String {
    if let Some(excerpt) = post.excerpt_text() {
        return excerpt.to_string();
    }
    if let Some(text) = post
        .content_text()
        .and_then(|c| description_from_content(c, META_DESCRIPTION_MAX_CHARS))
    {
        return text;
    }
    format!(
        "Read about {} on {}. Discover insights about {} and more.",
        post.title,
        site.site_name,
        post.category.to_lowercase()
    )
}

/// Slug of `text`, or `fallback` when that slug would be empty.
pub fn slug_or(text: &str, fallback: &str) -> String {
    let slug = slugify(text);
    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

/// Minutes at 200 words per minute, rounded up, at least 1; 5 without content.
pub fn estimate_read_time(content: Option<&str>) -> u32 {
    match content {
        Some(text) => {
            let minutes = word_count(text).div_ceil(WORDS_PER_MINUTE).max(1);
            u32::try_from(minutes).unwrap_or(u32::MAX)
        }
        None => DEFAULT_READ_TIME_MINUTES,
    }
}

/// Tags, category, `blog`, `article`, and the author's lowercased first name, comma-joined.
pub fn keywords(post: &PostDraft) -> String {
    let author = first_token_lower(&post.author_name);
    post.tags
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(post.category.as_str()))
        .chain(FIXED_KEYWORDS)
        .chain(std::iter::once(author.as_str()))
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
