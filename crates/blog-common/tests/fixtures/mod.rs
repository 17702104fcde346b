#![allow(dead_code)]

use blog_common::types::{Article, PostDraft, Status};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Midnight UTC on the given day.
pub fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
}

/// A published article with the given fields and sensible defaults for the rest.
pub fn article(id: &str, title: &str, category: &str, tags: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: None,
        content: None,
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        author_name: "Sarah Johnson".to_string(),
        publish_date: day(2024, 1, 1),
        read_time_minutes: 5,
        status: Status::Published,
        image: None,
        featured: false,
    }
}

pub fn dated(mut a: Article, date: DateTime<Utc>) -> Article {
    a.publish_date = date;
    a
}

pub fn as_featured(mut a: Article) -> Article {
    a.featured = true;
    a
}

pub fn draft(mut a: Article) -> Article {
    a.status = Status::Draft;
    a
}

/// A small blog: mixed categories, dates, read times, and one draft.
pub fn sample_articles() -> Vec<Article> {
    let mut future = article(
        "1",
        "The Future of Web Development: Trends to Watch in 2024",
        "Technology",
        &["Web Development", "AI", "CSS", "Trends"],
    );
    future.excerpt = Some(
        "Explore the latest trends shaping the future of web development, from AI-powered tools to responsive design."
            .to_string(),
    );
    future.publish_date = day(2024, 1, 15);
    future.read_time_minutes = 8;

    let mut grid = article(
        "2",
        "Building Responsive Layouts with Modern CSS Grid",
        "Design",
        &["CSS", "Grid", "Responsive Design"],
    );
    grid.excerpt = Some("Master flexible layouts using CSS Grid.".to_string());
    grid.publish_date = day(2024, 1, 12);
    grid.read_time_minutes = 12;

    let mut hooks = article(
        "3",
        "React Hooks in Practice",
        "Technology",
        &["React", "JavaScript"],
    );
    hooks.publish_date = day(2024, 1, 20);
    hooks.read_time_minutes = 6;

    let mut remote = article("4", "Remote Work Habits That Stick", "Lifestyle", &["Productivity"]);
    remote.publish_date = day(2024, 1, 10);
    remote.read_time_minutes = 4;

    let mut unpublished = article("5", "Draft: React Server Components", "Technology", &["React"]);
    unpublished.publish_date = day(2024, 2, 1);
    unpublished.status = Status::Draft;

    vec![future, grid, hooks, remote, unpublished]
}

pub fn post(title: &str) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        category: "Tech".to_string(),
        author_name: "Jane Doe".to_string(),
        ..PostDraft::default()
    }
}

pub fn ids(articles: &[&Article]) -> Vec<String> {
    articles.iter().map(|a| a.id.clone()).collect()
}
