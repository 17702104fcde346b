//! Heuristic SEO quality scoring.
//!
//! Issues are blocking problems and cost 20 points each; recommendations are
//! suggestions and cost 5. The score never goes below zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::normalization::char_len;
use crate::seo::{description_source, META_DESCRIPTION_MAX_CHARS, SEO_TITLE_MAX_CHARS};
use crate::types::{PostDraft, SeoMetadata};

pub const TITLE_MIN_CHARS: usize = 30;
pub const DESCRIPTION_MIN_CHARS: usize = 120;
pub const MIN_TAGS: usize = 3;
pub const MAX_TAGS: usize = 10;
pub const CONTENT_MIN_CHARS: usize = 300;

pub const ISSUE_PENALTY: u32 = 20;
pub const RECOMMENDATION_PENALTY: u32 = 5;
/// Most recommendations a result may carry and still count as optimal.
pub const OPTIMAL_MAX_RECOMMENDATIONS: usize = 2;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeoIssue {
    TitleTooShort,
    TitleTooLong,
    DescriptionTooLong,
}

impl fmt::Display for SeoIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SeoIssue::TitleTooShort => "Title is too short (should be 30-60 characters)",
            SeoIssue::TitleTooLong => "Title is too long (should be under 60 characters)",
            SeoIssue::DescriptionTooLong => {
                "Meta description is too long (should be under 160 characters)"
            }
        };
        f.write_str(msg)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeoRecommendation {
    DescriptionCouldBeLonger,
    AddMoreTags,
    TooManyTags,
    ContentIsShort,
}

impl fmt::Display for SeoRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SeoRecommendation::DescriptionCouldBeLonger => {
                "Meta description could be longer (120-160 characters optimal)"
            }
            SeoRecommendation::AddMoreTags => {
                "Consider adding more tags (3-5 recommended for better SEO)"
            }
            SeoRecommendation::TooManyTags => {
                "Too many tags might dilute SEO focus (5-8 tags recommended)"
            }
            SeoRecommendation::ContentIsShort => {
                "Content is quite short. Longer content (500+ words) tends to rank better"
            }
        };
        f.write_str(msg)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub score: u8,
    pub issues: Vec<SeoIssue>,
    pub recommendations: Vec<SeoRecommendation>,
    pub is_optimal: bool,
}

/// Score metadata as given. Saved metadata may have been edited by hand, so the
/// upper-bound checks still apply even though derivation never exceeds them.
pub fn validate(metadata: &SeoMetadata, tags: &[String], content: Option<&str>) -> ValidationResult {
    check(&metadata.seo_title, &metadata.meta_description, tags, content)
}

/// Score what the author wrote, before derivation truncates title and description.
pub fn validate_intent(post: &PostDraft, site: &SiteConfig) -> ValidationResult {
    let description = description_source(post, site);
    check(&post.title, &description, &post.tags, post.content_text())
}

fn check(title: &str, description: &str, tags: &[String], content: Option<&str>) -> ValidationResult {
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    let title_len = char_len(title);
    if title_len < TITLE_MIN_CHARS {
        issues.push(SeoIssue::TitleTooShort);
    }
    if title_len > SEO_TITLE_MAX_CHARS {
        issues.push(SeoIssue::TitleTooLong);
    }

    let description_len = char_len(description);
    if description_len < DESCRIPTION_MIN_CHARS {
        recommendations.push(SeoRecommendation::DescriptionCouldBeLonger);
    }
    if description_len > META_DESCRIPTION_MAX_CHARS {
        issues.push(SeoIssue::DescriptionTooLong);
    }

    if tags.len() < MIN_TAGS {
        recommendations.push(SeoRecommendation::AddMoreTags);
    }
    if tags.len() > MAX_TAGS {
        recommendations.push(SeoRecommendation::TooManyTags);
    }

    if content.is_some_and(|c| !c.is_empty() && char_len(c) < CONTENT_MIN_CHARS) {
        recommendations.push(SeoRecommendation::ContentIsShort);
    }

    ValidationResult {
        score: seo_score(issues.len(), recommendations.len()),
        is_optimal: issues.is_empty() && recommendations.len() <= OPTIMAL_MAX_RECOMMENDATIONS,
        issues,
        recommendations,
    }
}

/// `max(0, 100 - 20 * issues - 5 * recommendations)`
pub fn seo_score(issue_count: usize, recommendation_count: usize) -> u8 {
    let penalty = (issue_count as u64) * ISSUE_PENALTY as u64
        + (recommendation_count as u64) * RECOMMENDATION_PENALTY as u64;
    100u64.saturating_sub(penalty) as u8
}
