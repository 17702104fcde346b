//! Category browsing over published articles.

use crate::normalization::{fold_case, normalize_text};
use crate::search::published;
use crate::types::{Article, CategorySummary};

/// Name given to articles with a blank category.
pub const UNCATEGORIZED: &str = "General";
/// Articles previewed per category card.
pub const PREVIEW_LIMIT: usize = 3;
/// Related articles shown under an article.
pub const RELATED_LIMIT: usize = 3;

/// Group published articles by category, largest group first.
/// Groups of equal size keep the order their first article appeared in.
pub fn group_by_category(articles: &[Article]) -> Vec<CategorySummary> {
    let mut groups: Vec<(String, Vec<&Article>)> = Vec::new();
    for article in published(articles) {
        let name = category_name(&article.category);
        match groups.iter_mut().find(|(n, _)| *n == name) {
            Some((_, members)) => members.push(article),
            None => groups.push((name, vec![article])),
        }
    }

    let mut summaries: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(name, members)| CategorySummary {
            name,
            count: members.len(),
            preview: members.into_iter().take(PREVIEW_LIMIT).cloned().collect(),
        })
        .collect();
    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}

/// Published articles whose category equals `name`, ignoring case.
pub fn articles_in_category<'a>(articles: &'a [Article], name: &str) -> Vec<&'a Article> {
    let wanted = fold_case(name.trim());
    published(articles)
        .filter(|a| fold_case(&a.category) == wanted)
        .collect()
}

/// Other published articles in the same category as `article`, up to `limit`.
pub fn related_articles<'a>(
    articles: &'a [Article],
    article: &Article,
    limit: usize,
) -> Vec<&'a Article> {
    published(articles)
        .filter(|a| a.category == article.category && a.id != article.id)
        .take(limit)
        .collect()
}

fn category_name(raw: &str) -> String {
    let name = normalize_text(raw);
    if name.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        name
    }
}
