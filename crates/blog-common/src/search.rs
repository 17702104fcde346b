//! Article discovery: substring filtering, category filtering, stable sorting,
//! and capped autocomplete suggestions.

use serde::{Deserialize, Serialize};

use crate::normalization::{char_len, fold_case};
use crate::types::{Article, SearchSuggestion};

/// Maximum suggestions in the search dropdown.
pub const SUGGESTION_LIMIT: usize = 5;
/// Shortest trimmed query that produces suggestions.
pub const MIN_SUGGESTION_QUERY_CHARS: usize = 2;
/// Category selector value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Result ordering for the article listing.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Publish date, newest first.
    #[default]
    Newest,
    /// Publish date, oldest first.
    Oldest,
    /// Read time, longest first. There is no view count, so read time stands in.
    Popular,
    /// Collection order.
    Unsorted,
}

impl SortBy {
    /// Parse a selector value; anything unrecognized leaves the order alone.
    pub fn parse(value: &str) -> SortBy {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => SortBy::Newest,
            "oldest" => SortBy::Oldest,
            "popular" => SortBy::Popular,
            _ => SortBy::Unsorted,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// `"all"` (any case) disables the filter; anything else names a category.
    pub fn parse(value: &str) -> CategoryFilter {
        if value.trim().eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    /// Exact, case-insensitive category comparison.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => fold_case(name) == fold_case(category),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub category: CategoryFilter,
    pub sort_by: SortBy,
}

/// Suggestions plus whether more matches exist beyond the cap.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionPage {
    pub suggestions: Vec<SearchSuggestion>,
    pub has_more: bool,
}

/// Case-insensitive substring match of an already folded, non-empty query
/// against title, excerpt, category, and tags.
pub fn matches_query(article: &Article, folded_query: &str) -> bool {
    let hit = |field: &str| fold_case(field).contains(folded_query);
    hit(article.title.as_str())
        || article.excerpt.as_deref().is_some_and(hit)
        || hit(article.category.as_str())
        || article.tags.iter().any(|t| hit(t.as_str()))
}

/// Filter by query and category, then order by `params.sort_by`.
///
/// The input is never reordered; the result borrows from it. Ties keep their
/// collection order.
pub fn filter_and_sort<'a>(articles: &'a [Article], params: &SearchParams) -> Vec<&'a Article> {
    let query = fold_case(params.query.trim());
    let mut results: Vec<&Article> = articles
        .iter()
        .filter(|a| query.is_empty() || matches_query(a, &query))
        .filter(|a| params.category.matches(&a.category))
        .collect();
    sort_articles(&mut results, params.sort_by);
    results
}

/// Stable sort in place. Dates compare by calendar day.
pub fn sort_articles(articles: &mut [&Article], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => articles.sort_by(|a, b| b.publish_day().cmp(&a.publish_day())),
        SortBy::Oldest => articles.sort_by_key(|a| a.publish_day()),
        SortBy::Popular => {
            articles.sort_by(|a, b| b.read_time_minutes.cmp(&a.read_time_minutes))
        }
        SortBy::Unsorted => {}
    }
}

/// Published articles only, in collection order.
pub fn published(articles: &[Article]) -> impl Iterator<Item = &Article> {
    articles.iter().filter(|a| a.is_published())
}

/// Published articles flagged for the home page, in collection order.
pub fn featured(articles: &[Article]) -> impl Iterator<Item = &Article> {
    published(articles).filter(|a| a.featured)
}

/// Up to five suggestions for the dropdown, in collection order.
pub fn suggest(articles: &[Article], query: &str) -> Vec<SearchSuggestion> {
    suggest_page(articles, query).suggestions
}

/// Suggestions with an exact overflow flag: one extra match is looked up so
/// `has_more` is only set when a sixth match really exists.
pub fn suggest_page(articles: &[Article], query: &str) -> SuggestionPage {
    let trimmed = query.trim();
    if char_len(trimmed) < MIN_SUGGESTION_QUERY_CHARS {
        return SuggestionPage::default();
    }
    let folded = fold_case(trimmed);

    let mut suggestions: Vec<SearchSuggestion> = published(articles)
        .filter(|a| matches_query(a, &folded))
        .take(SUGGESTION_LIMIT + 1)
        .map(SearchSuggestion::from)
        .collect();
    let has_more = suggestions.len() > SUGGESTION_LIMIT;
    suggestions.truncate(SUGGESTION_LIMIT);

    SuggestionPage {
        suggestions,
        has_more,
    }
}
