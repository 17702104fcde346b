mod fixtures;

use blog_common::config::SiteConfig;
use blog_common::seo::*;
use fixtures::{article, day, post};

// ============================================================================
// Title
// ============================================================================

#[test]
fn long_title_truncated_to_sixty_with_ellipsis() {
    let meta = derive_metadata_at(&post(&"A".repeat(100)), &SiteConfig::default(), day(2024, 1, 1));
    assert_eq!(meta.seo_title.chars().count(), 60);
    assert!(meta.seo_title.ends_with("..."));
    assert_eq!(&meta.seo_title[..57], "A".repeat(57));
}

#[test]
fn title_at_limit_kept_verbatim() {
    let title = "B".repeat(60);
    assert_eq!(seo_title(&title), title);
}

#[test]
fn multibyte_title_counts_characters() {
    let title = "é".repeat(61);
    let result = seo_title(&title);
    assert_eq!(result.chars().count(), 60);
    assert!(result.starts_with(&"é".repeat(57)));
}

// ============================================================================
// Description
// ============================================================================

#[test]
fn excerpt_wins_over_content() {
    let mut p = post("Title");
    p.excerpt = Some("Short excerpt.".to_string());
    p.content = Some("<p>Body text</p>".to_string());
    assert_eq!(meta_description(&p, &SiteConfig::default()), "Short excerpt.");
}

#[test]
fn empty_excerpt_falls_through_to_content() {
    let mut p = post("Title");
    p.excerpt = Some(String::new());
    p.content = Some("  <h2>Intro</h2><p>Body text</p>  ".to_string());
    assert_eq!(meta_description(&p, &SiteConfig::default()), "IntroBody text");
}

#[test]
fn long_content_clamped_to_160() {
    let mut p = post("Title");
    p.content = Some(format!("<p>{}</p>", "word ".repeat(100)));
    let desc = meta_description(&p, &SiteConfig::default());
    assert_eq!(desc.chars().count(), 160);
    assert!(desc.ends_with("..."));
}

#[test]
fn long_excerpt_clamped_to_160() {
    let mut p = post("Title");
    p.excerpt = Some("x".repeat(400));
    let desc = meta_description(&p, &SiteConfig::default());
    assert_eq!(desc.chars().count(), 160);
    assert!(desc.ends_with("..."));
}

#[test]
fn synthesized_description_without_excerpt_or_content() {
    let desc = meta_description(&post("Rust Ownership"), &SiteConfig::default());
    assert_eq!(
        desc,
        "Read about Rust Ownership on ModernBlog. Discover insights about tech and more."
    );
}

#[test]
fn markup_only_content_uses_synthesized_sentence() {
    let mut p = post("Images");
    p.content = Some("<img src=\"a.png\"><br/>".to_string());
    assert!(meta_description(&p, &SiteConfig::default()).starts_with("Read about Images"));
}

// ============================================================================
// Slug
// ============================================================================

#[test]
fn slug_from_punctuated_title() {
    let meta = derive_metadata_at(
        &post("  Hello, World! Rust & WASM -- 2024  "),
        &SiteConfig::default(),
        day(2024, 1, 1),
    );
    assert_eq!(meta.slug, "hello-world-rust-wasm-2024");
}

#[test]
fn slug_without_alphanumerics_falls_back() {
    let meta = derive_metadata_at(&post("!!! ???"), &SiteConfig::default(), day(2024, 1, 1));
    assert_eq!(meta.slug, FALLBACK_SLUG);
}

#[test]
fn stored_article_slug_falls_back_to_id() {
    let a = article("Post 42", "¿¡!", "Tech", &[]);
    let meta = derive_metadata_for(&a, &SiteConfig::default());
    assert_eq!(meta.slug, "post-42");
}

#[test]
fn canonical_url_ends_with_slug() {
    let meta = derive_metadata_at(&post("Canonical Test"), &SiteConfig::default(), day(2024, 1, 1));
    assert_eq!(meta.canonical_url, "https://modernblog.com/article/canonical-test");
    assert!(meta.canonical_url.ends_with(&meta.slug));
}

// ============================================================================
// Read time and keywords
// ============================================================================

#[test]
fn read_time_defaults_without_content() {
    assert_eq!(estimate_read_time(None), DEFAULT_READ_TIME_MINUTES);
}

#[test]
fn read_time_rounds_up() {
    let content = "word ".repeat(201);
    assert_eq!(estimate_read_time(Some(&content)), 2);
}

#[test]
fn read_time_floor_is_one_minute() {
    assert_eq!(estimate_read_time(Some("one two")), 1);
}

#[test]
fn empty_content_counts_as_absent() {
    let mut p = post("Empty");
    p.content = Some(String::new());
    let meta = derive_metadata_at(&p, &SiteConfig::default(), day(2024, 1, 1));
    assert_eq!(meta.estimated_read_time, DEFAULT_READ_TIME_MINUTES);
}

#[test]
fn keywords_order_and_author_first_name() {
    let mut p = post("Keywords");
    p.tags = vec!["Rust".to_string(), String::new(), "Async".to_string()];
    assert_eq!(keywords(&p), "Rust, Async, Tech, blog, article, jane");
}

#[test]
fn keywords_drop_empty_category_and_author() {
    let mut p = post("Keywords");
    p.category = String::new();
    p.author_name = String::new();
    assert_eq!(keywords(&p), "blog, article");
}

// ============================================================================
// Structured data
// ============================================================================

#[test]
fn structured_data_mirrors_metadata() {
    let mut p = post("Structured Data Article");
    p.tags = vec!["SEO".to_string(), "JSON-LD".to_string()];
    let meta = derive_metadata_at(&p, &SiteConfig::default(), day(2024, 3, 5));
    let sd = &meta.structured_data;

    assert_eq!(sd.schema_type, "Article");
    assert_eq!(sd.headline, meta.seo_title);
    assert_eq!(sd.description, meta.meta_description);
    assert_eq!(sd.author.name, "Jane Doe");
    assert_eq!(sd.author.url, "https://modernblog.com/author/jane-doe");
    assert_eq!(sd.publisher.name, "ModernBlog");
    assert_eq!(sd.date_published, "2024-03-05T00:00:00.000Z");
    assert_eq!(sd.date_modified, sd.date_published);
    assert_eq!(sd.article_section.as_deref(), Some("Tech"));
    assert_eq!(sd.keywords.as_deref(), Some("SEO, JSON-LD"));
}

#[test]
fn empty_author_is_kept_as_given() {
    let mut p = post("Anonymous Notes");
    p.author_name = String::new();
    let meta = derive_metadata_at(&p, &SiteConfig::default(), day(2024, 1, 1));
    assert_eq!(meta.structured_data.author.name, "");
    assert_eq!(meta.structured_data.author.url, "https://modernblog.com/author/");
    assert_eq!(meta.structured_data.publisher.name, "ModernBlog");
}

#[test]
fn supplied_publish_date_beats_now() {
    let mut p = post("Dated");
    p.publish_date = Some(day(2023, 6, 1));
    let meta = derive_metadata_at(&p, &SiteConfig::default(), day(2030, 1, 1));
    assert_eq!(meta.structured_data.date_published, "2023-06-01T00:00:00.000Z");
}

#[test]
fn structured_data_json_shape() {
    let meta = derive_metadata_at(&post("Shape Check"), &SiteConfig::default(), day(2024, 1, 1));
    let value: serde_json::Value =
        serde_json::from_str(&meta.structured_data.to_json_ld().unwrap()).unwrap();

    assert_eq!(value["@context"], "https://schema.org");
    assert_eq!(value["@type"], "Article");
    assert_eq!(value["author"]["@type"], "Person");
    assert_eq!(value["publisher"]["@type"], "Organization");
    assert_eq!(value["publisher"]["logo"]["@type"], "ImageObject");
    assert_eq!(value["datePublished"], "2024-01-01T00:00:00.000Z");
    assert_eq!(value["articleSection"], "Tech");
    // No tags, so no keywords field.
    assert!(value.get("keywords").is_none());
}

#[test]
fn custom_site_origin_flows_into_urls() {
    let site = SiteConfig::from_toml_str("origin = \"https://blog.example.org/\"\nsite_name = \"Example\"")
        .unwrap();
    let meta = derive_metadata_at(&post("Origin"), &site, day(2024, 1, 1));
    assert_eq!(meta.canonical_url, "https://blog.example.org/article/origin");
    assert_eq!(meta.structured_data.publisher.name, "Example");
}

#[test]
fn derivation_is_repeatable() {
    let mut p = post("Same Input Same Output");
    p.content = Some("<p>Some content here</p>".to_string());
    let site = SiteConfig::default();
    let a = derive_metadata_at(&p, &site, day(2024, 1, 1));
    let b = derive_metadata_at(&p, &site, day(2024, 1, 1));
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
