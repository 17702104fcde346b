mod fixtures;

use blog_common::config::SiteConfig;
use blog_common::head::*;
use blog_common::seo::derive_metadata_for;
use fixtures::sample_articles;

#[test]
fn site_default_is_a_website_page() {
    let site = SiteConfig::default();
    let tags = head_tags(&PageMeta::site_default(&site), &site);

    assert_eq!(
        tags[0],
        HeadTag::Title("ModernBlog - Your Premium Blogging Experience".to_string())
    );
    assert!(tags.contains(&HeadTag::Property {
        property: "og:type".to_string(),
        content: "website".to_string(),
    }));
    assert!(tags.contains(&HeadTag::Canonical("https://modernblog.com".to_string())));
    assert!(!tags.iter().any(|t| matches!(t, HeadTag::JsonLd(_))));
    assert!(!tags
        .iter()
        .any(|t| matches!(t, HeadTag::Property { property, .. } if property.starts_with("article:"))));
}

#[test]
fn article_page_has_article_properties_and_json_ld() {
    let site = SiteConfig::default();
    let articles = sample_articles();
    let article = &articles[0];
    let meta = derive_metadata_for(article, &site);
    let tags = head_tags(&PageMeta::for_article(article, &meta, &site), &site);

    let article_tags: Vec<_> = tags
        .iter()
        .filter_map(|t| match t {
            HeadTag::Property { property, content } if property == "article:tag" => {
                Some(content.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(article_tags, vec!["Web Development", "AI", "CSS", "Trends"]);

    assert!(tags.contains(&HeadTag::Property {
        property: "article:published_time".to_string(),
        content: "2024-01-15T00:00:00.000Z".to_string(),
    }));
    assert!(tags.contains(&HeadTag::Property {
        property: "article:section".to_string(),
        content: "Technology".to_string(),
    }));
    assert!(tags.contains(&HeadTag::Canonical(meta.canonical_url.clone())));

    let schema = tags
        .iter()
        .find_map(|t| match t {
            HeadTag::JsonLd(schema) => Some(schema.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(schema.headline, meta.seo_title);
    assert_eq!(schema.author.name, "Sarah Johnson");

    let html = render_head(&tags).unwrap();
    let script = html
        .lines()
        .find(|l| l.starts_with("<script"))
        .unwrap();
    let json = script
        .trim_start_matches(r#"<script type="application/ld+json" data-seo="article">"#)
        .trim_end_matches("</script>");
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["headline"], meta.seo_title);
    assert_eq!(value["author"]["name"], "Sarah Johnson");
    assert_eq!(value["@type"], "Article");
}

#[test]
fn article_without_image_uses_site_default() {
    let site = SiteConfig::default();
    let articles = sample_articles();
    let meta = derive_metadata_for(&articles[1], &site);
    let page = PageMeta::for_article(&articles[1], &meta, &site);
    assert_eq!(page.image, site.default_image);
}

#[test]
fn render_escapes_text_and_attributes() {
    let html = render_head(&[
        HeadTag::Title("Tom & Jerry <3".to_string()),
        HeadTag::Meta {
            name: "description".to_string(),
            content: "Say \"hi\"".to_string(),
        },
        HeadTag::Canonical("https://modernblog.com/article/a?b=1&c=2".to_string()),
    ])
    .unwrap();
    assert_eq!(
        html,
        "<title>Tom &amp; Jerry &lt;3</title>\n\
         <meta name=\"description\" content=\"Say &quot;hi&quot;\">\n\
         <link rel=\"canonical\" href=\"https://modernblog.com/article/a?b=1&amp;c=2\">\n"
    );
}

#[test]
fn render_json_ld_cannot_close_script() {
    let site = SiteConfig::default();
    let articles = sample_articles();
    let mut schema = derive_metadata_for(&articles[0], &site).structured_data;
    schema.headline = "</script><b>".to_string();

    let html = render_head(&[HeadTag::JsonLd(schema)]).unwrap();
    assert!(!html.contains("</script><b>"));
    assert!(html.contains(r#""headline":"<\/script><b>""#));
    assert!(html.ends_with("</script>\n"));
}
