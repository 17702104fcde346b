//! schema.org `Article` linked data for the page head.
//!
//! Field names and nesting follow what crawlers expect for the Article type,
//! so the serde renames below are part of the output contract.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub headline: String,
    pub description: String,
    pub author: Person,
    pub publisher: Organization,
    pub date_published: String,
    pub date_modified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub logo: ImageObject,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Inputs for [`build_article_schema`].
#[derive(Clone, Copy, Debug)]
pub struct SchemaFields<'a> {
    pub headline: &'a str,
    pub description: &'a str,
    pub author_name: &'a str,
    pub category: &'a str,
    pub tags: &'a [String],
    pub published: DateTime<Utc>,
}

/// Build the Article object. Both dates carry `published`; empty category or
/// tag list omit their fields.
pub fn build_article_schema(fields: &SchemaFields<'_>, site: &SiteConfig) -> ArticleSchema {
    let date = format_schema_date(fields.published);

    ArticleSchema {
        context: SCHEMA_CONTEXT.to_string(),
        schema_type: "Article".to_string(),
        headline: fields.headline.to_string(),
        description: fields.description.to_string(),
        author: Person {
            schema_type: "Person".to_string(),
            name: fields.author_name.to_string(),
            url: site.author_url(fields.author_name),
        },
        publisher: Organization {
            schema_type: "Organization".to_string(),
            name: site.site_name.clone(),
            logo: ImageObject {
                schema_type: "ImageObject".to_string(),
                url: site.logo.url.clone(),
                width: site.logo.width,
                height: site.logo.height,
            },
        },
        date_published: date.clone(),
        date_modified: date,
        article_section: (!fields.category.is_empty()).then(|| fields.category.to_string()),
        keywords: (!fields.tags.is_empty()).then(|| fields.tags.join(", ")),
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix, e.g. `2024-01-15T00:00:00.000Z`.
pub fn format_schema_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl ArticleSchema {
    /// Compact JSON for a `<script type="application/ld+json">` block.
    pub fn to_json_ld(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
