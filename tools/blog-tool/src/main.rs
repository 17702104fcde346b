use anyhow::{bail, Context, Result};
use blog_common::categories::{group_by_category, related_articles, RELATED_LIMIT};
use blog_common::config::SiteConfig;
use blog_common::hashing::is_stale;
use blog_common::head::{head_tags, render_head, PageMeta};
use blog_common::search::{
    featured, filter_and_sort, suggest_page, CategoryFilter, SearchParams, SortBy,
};
use blog_common::seo::{derive_metadata_at, derive_metadata_for};
use blog_common::social::derive_social_content;
use blog_common::types::{Article, PostDraft, Role, SeoMetadata};
use blog_common::validation::{validate, validate_intent};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{ArgAction, Parser, Subcommand};
use content_store::{load_published, ContentStore, FileStore};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blog-tool")]
#[command(about = "SEO metadata and article discovery for ModernBlog content")]
struct Cli {
    /// Site settings (default: ~/.config/modernblog/site.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log more; repeat for debug output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive SEO metadata for a post
    Seo {
        /// Post fields as JSON or TOML
        #[arg(long, short)]
        post: PathBuf,
        /// Publication time used when the post has none (RFC 3339)
        #[arg(long)]
        now: Option<String>,
        /// Previously saved metadata to compare against
        #[arg(long)]
        saved: Option<PathBuf>,
    },
    /// Generate social sharing copy for a post
    Social {
        #[arg(long, short)]
        post: PathBuf,
    },
    /// Score a post's SEO
    Validate {
        #[arg(long, short)]
        post: PathBuf,
        /// Check the author's text before truncation
        #[arg(long)]
        intent: bool,
    },
    /// Filter and sort the article listing
    Search {
        /// Article collection (JSON array)
        #[arg(long, short)]
        articles: PathBuf,
        #[arg(long, short, default_value = "")]
        query: String,
        #[arg(long, short, default_value = "all")]
        category: String,
        /// newest, oldest or popular
        #[arg(long, short, default_value = "newest")]
        sort: String,
    },
    /// Autocomplete suggestions for the search box
    Suggest {
        #[arg(long, short)]
        articles: PathBuf,
        #[arg(long, short)]
        query: String,
    },
    /// Articles flagged for the home page
    Featured {
        #[arg(long, short)]
        articles: PathBuf,
    },
    /// Category overview with article counts and previews
    Categories {
        #[arg(long, short)]
        articles: PathBuf,
    },
    /// Other articles in the same category
    Related {
        #[arg(long, short)]
        articles: PathBuf,
        #[arg(long)]
        id: String,
    },
    /// Render the document head for an article, or the site default
    Head {
        #[arg(long, short)]
        articles: PathBuf,
        /// Article id; omit for the site-wide head
        #[arg(long)]
        id: Option<String>,
    },
    /// Store a file and print its public URL
    Upload {
        #[arg(long, short)]
        articles: PathBuf,
        /// Upload directory (default: `uploads` next to the article file)
        #[arg(long)]
        uploads: Option<PathBuf>,
        #[arg(long, short)]
        input: PathBuf,
        /// Acting role: admin, moderator or user
        #[arg(long, default_value = "admin")]
        role: String,
    },
}

/// Listing card: the fields an article card shows.
#[derive(Serialize)]
struct Card<'a> {
    id: &'a str,
    title: &'a str,
    category: &'a str,
    author_name: &'a str,
    publish_date: NaiveDate,
    read_time: u32,
    tags: &'a [String],
}

impl<'a> From<&'a Article> for Card<'a> {
    fn from(article: &'a Article) -> Self {
        Card {
            id: &article.id,
            title: &article.title,
            category: &article.category,
            author_name: &article.author_name,
            publish_date: article.publish_day(),
            read_time: article.read_time_minutes,
            tags: article.card_tags(),
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("modernblog");
    p.push("site.toml");
    Some(p)
}

fn load_site(path: Option<PathBuf>) -> Result<SiteConfig> {
    let Some(path) = path.or_else(default_config_path) else {
        debug!("No config directory; using default site settings");
        return Ok(SiteConfig::default());
    };
    let site = SiteConfig::load(&path)
        .with_context(|| format!("Failed to load site config {}", path.display()))?;
    info!("Site origin {}", site.origin);
    Ok(site)
}

/// Read post fields from TOML when the extension says so, JSON otherwise.
fn read_post(path: &Path) -> Result<PostDraft> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let is_toml = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
    let post = if is_toml {
        toml::from_str(&text).with_context(|| format!("Invalid TOML post {}", path.display()))?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON post {}", path.display()))?
    };
    Ok(post)
}

fn parse_time(value: Option<&str>) -> Result<DateTime<Utc>> {
    match value {
        Some(v) => Ok(DateTime::parse_from_rfc3339(v)
            .with_context(|| format!("Invalid --now value {:?}", v))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

fn open_store(articles: &Path, uploads: Option<PathBuf>, site: SiteConfig) -> FileStore {
    let uploads = uploads.unwrap_or_else(|| {
        articles
            .parent()
            .map(|p| p.join("uploads"))
            .unwrap_or_else(|| PathBuf::from("uploads"))
    });
    FileStore::open(articles, uploads, site)
}

fn published_articles(path: &Path, site: &SiteConfig) -> Result<Vec<Article>> {
    let store = open_store(path, None, site.clone());
    load_published(&store).with_context(|| format!("Failed to load articles from {}", path.display()))
}

fn find_article<'a>(articles: &'a [Article], id: &str) -> Result<&'a Article> {
    match articles.iter().find(|a| a.id == id) {
        Some(article) => Ok(article),
        None => bail!("No published article with id {:?}", id),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn seo(site: &SiteConfig, post: &Path, now: Option<&str>, saved: Option<&Path>) -> Result<()> {
    let draft = read_post(post)?;
    let metadata = derive_metadata_at(&draft, site, parse_time(now)?);
    if let Some(saved) = saved {
        let text = fs::read_to_string(saved)
            .with_context(|| format!("Failed to read {}", saved.display()))?;
        let previous: SeoMetadata = serde_json::from_str(&text)
            .with_context(|| format!("Invalid saved metadata {}", saved.display()))?;
        if is_stale(&previous, &metadata) {
            warn!("Saved metadata in {} no longer matches the post", saved.display());
        } else {
            info!("Saved metadata in {} is current", saved.display());
        }
    }
    print_json(&metadata)
}

fn validate_post(site: &SiteConfig, post: &Path, intent: bool) -> Result<()> {
    let draft = read_post(post)?;
    let result = if intent {
        validate_intent(&draft, site)
    } else {
        let metadata = derive_metadata_at(&draft, site, Utc::now());
        validate(&metadata, &draft.tags, draft.content_text())
    };
    for issue in &result.issues {
        info!("Issue: {}", issue);
    }
    for rec in &result.recommendations {
        info!("Recommendation: {}", rec);
    }
    print_json(&result)
}

fn head(site: &SiteConfig, articles: &Path, id: Option<&str>) -> Result<()> {
    let page = match id {
        Some(id) => {
            let articles = published_articles(articles, site)?;
            let article = find_article(&articles, id)?;
            let metadata = derive_metadata_for(article, site);
            PageMeta::for_article(article, &metadata, site)
        }
        None => PageMeta::site_default(site),
    };
    let html = render_head(&head_tags(&page, site)).context("Failed to render page head")?;
    println!("{}", html);
    Ok(())
}

fn upload(
    site: SiteConfig,
    articles: &Path,
    uploads: Option<PathBuf>,
    input: &Path,
    role: &str,
) -> Result<()> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let mut store = open_store(articles, uploads, site).with_role(Role::from_column(Some(role)));
    let url = store
        .upload(&bytes, file_name)
        .with_context(|| format!("Failed to upload {}", input.display()))?;
    println!("{}", url);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let site = load_site(cli.config)?;
    match cli.command {
        Commands::Seo { post, now, saved } => seo(&site, &post, now.as_deref(), saved.as_deref()),
        Commands::Social { post } => print_json(&derive_social_content(&read_post(&post)?)),
        Commands::Validate { post, intent } => validate_post(&site, &post, intent),
        Commands::Search {
            articles,
            query,
            category,
            sort,
        } => {
            let articles = published_articles(&articles, &site)?;
            let params = SearchParams {
                query,
                category: CategoryFilter::parse(&category),
                sort_by: SortBy::parse(&sort),
            };
            let cards: Vec<Card> = filter_and_sort(&articles, &params)
                .into_iter()
                .map(Card::from)
                .collect();
            info!("{} of {} articles match", cards.len(), articles.len());
            print_json(&cards)
        }
        Commands::Suggest { articles, query } => {
            let articles = published_articles(&articles, &site)?;
            print_json(&suggest_page(&articles, &query))
        }
        Commands::Featured { articles } => {
            let articles = published_articles(&articles, &site)?;
            let cards: Vec<Card> = featured(&articles).map(Card::from).collect();
            print_json(&cards)
        }
        Commands::Categories { articles } => {
            let articles = published_articles(&articles, &site)?;
            print_json(&group_by_category(&articles))
        }
        Commands::Related { articles, id } => {
            let articles = published_articles(&articles, &site)?;
            let article = find_article(&articles, &id)?;
            let cards: Vec<Card> = related_articles(&articles, article, RELATED_LIMIT)
                .into_iter()
                .map(Card::from)
                .collect();
            print_json(&cards)
        }
        Commands::Head { articles, id } => head(&site, &articles, id.as_deref()),
        Commands::Upload {
            articles,
            uploads,
            input,
            role,
        } => upload(site, &articles, uploads, &input, &role),
    }
}
