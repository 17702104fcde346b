//! Local stand-in for the hosted backend: articles in a JSON array file,
//! uploads in a content-addressed directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use blog_common::config::SiteConfig;
use blog_common::types::{Article, Role, Status};
use tracing::{debug, info};

use crate::{check_upload, select_by_status, upload_name, ContentStore, StoreError};

#[derive(Clone, Debug)]
pub struct FileStore {
    articles_path: PathBuf,
    uploads_dir: PathBuf,
    site: SiteConfig,
    role: Role,
}

impl FileStore {
    /// Open a store. Nothing is read until the first call; a missing articles
    /// file reads as an empty collection. The local operator acts as admin.
    pub fn open(
        articles_path: impl Into<PathBuf>,
        uploads_dir: impl Into<PathBuf>,
        site: SiteConfig,
    ) -> Self {
        FileStore {
            articles_path: articles_path.into(),
            uploads_dir: uploads_dir.into(),
            site,
            role: Role::Admin,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn articles_path(&self) -> &Path {
        &self.articles_path
    }

    /// Every row regardless of status, in file order.
    pub fn read_all(&self) -> Result<Vec<Article>, StoreError> {
        let text = match fs::read_to_string(&self.articles_path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No article file at {}", self.articles_path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let articles: Vec<Article> = serde_json::from_str(&text)?;
        debug!(
            "Read {} articles from {}",
            articles.len(),
            self.articles_path.display()
        );
        Ok(articles)
    }

    /// Overwrite the article file with `articles`.
    pub fn write_all(&self, articles: &[Article]) -> Result<(), StoreError> {
        if let Some(parent) = self.articles_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(articles)?;
        fs::write(&self.articles_path, json)?;
        info!(
            "Wrote {} articles to {}",
            articles.len(),
            self.articles_path.display()
        );
        Ok(())
    }
}

impl ContentStore for FileStore {
    fn current_user_role(&self) -> Result<Role, StoreError> {
        Ok(self.role)
    }

    fn list_articles(&self, status: Status) -> Result<Vec<Article>, StoreError> {
        let rows = select_by_status(&self.read_all()?, status);
        info!("Listed {} {} articles", rows.len(), status.as_str());
        Ok(rows)
    }

    fn upload(&mut self, bytes: &[u8], file_name: &str) -> Result<String, StoreError> {
        check_upload(self.role, bytes)?;
        let name = upload_name(bytes, file_name);
        let path = self.uploads_dir.join(&name);
        if path.exists() {
            debug!("Upload {} already stored", name);
        } else {
            fs::create_dir_all(&self.uploads_dir)?;
            fs::write(&path, bytes)?;
            info!("Stored upload {} ({} bytes)", name, bytes.len());
        }
        Ok(self.site.upload_url(&name))
    }
}
