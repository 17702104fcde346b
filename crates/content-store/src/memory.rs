use std::collections::BTreeMap;

use blog_common::config::SiteConfig;
use blog_common::types::{Article, Role, Status};

use crate::{check_upload, select_by_status, upload_name, ContentStore, StoreError};

/// Store held entirely in memory. Backs tests and fixtures.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    articles: Vec<Article>,
    role: Role,
    site: SiteConfig,
    uploads: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new(articles: Vec<Article>, role: Role) -> Self {
        MemoryStore {
            articles,
            role,
            ..MemoryStore::default()
        }
    }

    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    /// Replace the whole collection, as a refresh from the backend does.
    pub fn replace_articles(&mut self, articles: Vec<Article>) {
        self.articles = articles;
    }

    /// Bytes stored under an upload name.
    pub fn uploaded(&self, name: &str) -> Option<&[u8]> {
        self.uploads.get(name).map(Vec::as_slice)
    }
}

impl ContentStore for MemoryStore {
    fn current_user_role(&self) -> Result<Role, StoreError> {
        Ok(self.role)
    }

    fn list_articles(&self, status: Status) -> Result<Vec<Article>, StoreError> {
        Ok(select_by_status(&self.articles, status))
    }

    fn upload(&mut self, bytes: &[u8], file_name: &str) -> Result<String, StoreError> {
        check_upload(self.role, bytes)?;
        let name = upload_name(bytes, file_name);
        let url = self.site.upload_url(&name);
        self.uploads.insert(name, bytes.to_vec());
        Ok(url)
    }
}
