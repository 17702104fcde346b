use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::structured_data::ArticleSchema;

/// Number of tags shown on an article card.
pub const CARD_TAG_COUNT: usize = 2;

/// A blog post row as read from the content store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author_name: String,
    pub publish_date: DateTime<Utc>,
    #[serde(alias = "read_time")]
    pub read_time_minutes: u32,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status == Status::Published
    }

    /// Excerpt text, empty when absent.
    pub fn excerpt_text(&self) -> &str {
        self.excerpt.as_deref().unwrap_or("")
    }

    /// Calendar day of publication; sorting ignores the time of day.
    pub fn publish_day(&self) -> NaiveDate {
        self.publish_date.date_naive()
    }

    pub fn card_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(CARD_TAG_COUNT)]
    }
}

/// Publication status of an article.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Published,
    #[default]
    Draft,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Published => "published",
            Status::Draft => "draft",
        }
    }
}

/// Role attached to the signed-in account.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    #[default]
    User,
}

impl Role {
    /// Parse a role column value. Missing or unknown roles fall back to `User`.
    pub fn from_column(value: Option<&str>) -> Role {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("admin") => Role::Admin,
            Some(v) if v.eq_ignore_ascii_case("moderator") => Role::Moderator,
            _ => Role::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
        }
    }

    pub fn can_manage_posts(&self) -> bool {
        matches!(self, Role::Admin | Role::Moderator)
    }
}

/// Authoring fields the SEO engine derives metadata from.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: Option<String>,
}

impl PostDraft {
    /// Excerpt if present and non-empty.
    pub fn excerpt_text(&self) -> Option<&str> {
        self.excerpt.as_deref().filter(|e| !e.is_empty())
    }

    /// Content if present and non-empty.
    pub fn content_text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

impl From<&Article> for PostDraft {
    fn from(article: &Article) -> Self {
        PostDraft {
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            category: article.category.clone(),
            tags: article.tags.clone(),
            author_name: article.author_name.clone(),
            publish_date: Some(article.publish_date),
            image: article.image.clone(),
        }
    }
}

/// Search-engine metadata derived from a post.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeoMetadata {
    pub seo_title: String,
    pub meta_description: String,
    pub slug: String,
    pub estimated_read_time: u32,
    pub keywords: String,
    pub canonical_url: String,
    pub structured_data: ArticleSchema,
}

/// Lightweight article summary for the search dropdown.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchSuggestion {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
}

impl From<&Article> for SearchSuggestion {
    fn from(article: &Article) -> Self {
        SearchSuggestion {
            id: article.id.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt_text().to_string(),
            category: article.category.clone(),
        }
    }
}

/// One category on the category browsing page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
    pub preview: Vec<Article>,
}
