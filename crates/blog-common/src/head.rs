//! Page `<head>` tags: document title, description, Open Graph, Twitter card,
//! article properties, canonical link, and the Article JSON-LD block.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::structured_data::{build_article_schema, format_schema_date, ArticleSchema, SchemaFields};
use crate::types::{Article, SeoMetadata};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Website,
    Article,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Website => "website",
            PageKind::Article => "article",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
    pub kind: PageKind,
    pub published_time: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
}

impl PageMeta {
    /// Head for pages without their own metadata.
    pub fn site_default(site: &SiteConfig) -> Self {
        PageMeta {
            title: format!("{} - Your Premium Blogging Experience", site.site_name),
            description: format!(
                "Discover insightful articles, tutorials, and stories on {} - your premium destination for quality content.",
                site.site_name
            ),
            image: site.default_image.clone(),
            url: site.origin.clone(),
            kind: PageKind::Website,
            published_time: None,
            author: None,
            tags: Vec::new(),
            category: None,
        }
    }

    /// Head for an article detail page.
    pub fn for_article(article: &Article, metadata: &SeoMetadata, site: &SiteConfig) -> Self {
        PageMeta {
            title: metadata.seo_title.clone(),
            description: metadata.meta_description.clone(),
            image: article
                .image
                .clone()
                .unwrap_or_else(|| site.default_image.clone()),
            url: metadata.canonical_url.clone(),
            kind: PageKind::Article,
            published_time: Some(article.publish_date),
            author: Some(article.author_name.clone()).filter(|a| !a.is_empty()),
            tags: article.tags.clone(),
            category: Some(article.category.clone()).filter(|c| !c.is_empty()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    /// `<meta name=".." content="..">`
    Meta { name: String, content: String },
    /// `<meta property=".." content="..">`
    Property { property: String, content: String },
    Canonical(String),
    /// Article linked data, serialized when rendered.
    JsonLd(ArticleSchema),
}

fn meta(name: &str, content: &str) -> HeadTag {
    HeadTag::Meta {
        name: name.to_string(),
        content: content.to_string(),
    }
}

fn property(property: &str, content: &str) -> HeadTag {
    HeadTag::Property {
        property: property.to_string(),
        content: content.to_string(),
    }
}

pub fn head_tags(page: &PageMeta, site: &SiteConfig) -> Vec<HeadTag> {
    let mut tags = vec![
        HeadTag::Title(page.title.clone()),
        meta("description", &page.description),
        property("og:title", &page.title),
        property("og:description", &page.description),
        property("og:image", &page.image),
        property("og:url", &page.url),
        property("og:type", page.kind.as_str()),
        meta("twitter:title", &page.title),
        meta("twitter:description", &page.description),
        meta("twitter:image", &page.image),
    ];

    if page.kind == PageKind::Article {
        if let Some(published) = page.published_time {
            tags.push(property(
                "article:published_time",
                &format_schema_date(published),
            ));
        }
        if let Some(author) = &page.author {
            tags.push(property("article:author", author));
        }
        if let Some(category) = &page.category {
            tags.push(property("article:section", category));
        }
        for tag in &page.tags {
            tags.push(property("article:tag", tag));
        }
    }

    tags.push(HeadTag::Canonical(page.url.clone()));

    if page.kind == PageKind::Article {
        if let Some(schema) = article_schema(page, site) {
            tags.push(HeadTag::JsonLd(schema));
        }
    }
    tags
}

fn article_schema(page: &PageMeta, site: &SiteConfig) -> Option<ArticleSchema> {
    let published = page.published_time?;
    Some(build_article_schema(
        &SchemaFields {
            headline: &page.title,
            description: &page.description,
            author_name: page.author.as_deref().unwrap_or(""),
            category: page.category.as_deref().unwrap_or(""),
            tags: &page.tags,
            published,
        },
        site,
    ))
}

/// Render tags as HTML, one per line. Fails only if JSON-LD serialization does.
pub fn render_head(tags: &[HeadTag]) -> serde_json::Result<String> {
    let mut out = String::new();
    for tag in tags {
        let line = match tag {
            HeadTag::Title(text) => format!("<title>{}</title>", html_escape(text)),
            HeadTag::Meta { name, content } => format!(
                r#"<meta name="{}" content="{}">"#,
                html_attr_escape(name),
                html_attr_escape(content)
            ),
            HeadTag::Property { property, content } => format!(
                r#"<meta property="{}" content="{}">"#,
                html_attr_escape(property),
                html_attr_escape(content)
            ),
            HeadTag::Canonical(href) => {
                format!(r#"<link rel="canonical" href="{}">"#, html_attr_escape(href))
            }
            HeadTag::JsonLd(schema) => format!(
                r#"<script type="application/ld+json" data-seo="article">{}</script>"#,
                schema.to_json_ld()?.replace("</", "<\\/")
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn html_attr_escape(s: &str) -> String {
    html_escape(s).replace('"', "&quot;")
}
