//! Capability interface to the hosted backend that owns accounts, article rows,
//! and uploaded files, plus two local implementations.
//!
//! The engines in `blog-common` never talk to a store; callers load a
//! collection through [`ContentStore::list_articles`] and hand it over.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::Path;

use blog_common::hashing::content_digest_hex;
use blog_common::types::{Article, Role, Status};

pub trait ContentStore {
    /// Role of the signed-in account; anonymous sessions are `Role::User`.
    fn current_user_role(&self) -> Result<Role, StoreError>;

    /// Every article with `status`, newest publish date first.
    fn list_articles(&self, status: Status) -> Result<Vec<Article>, StoreError>;

    /// Store `bytes` and return their public URL.
    fn upload(&mut self, bytes: &[u8], file_name: &str) -> Result<String, StoreError>;
}

/// Bulk read of the public collection.
pub fn load_published<S: ContentStore + ?Sized>(store: &S) -> Result<Vec<Article>, StoreError> {
    store.list_articles(Status::Published)
}

/// Rows matching `status`, ordered newest first. Equal timestamps keep row order.
pub(crate) fn select_by_status(articles: &[Article], status: Status) -> Vec<Article> {
    let mut rows: Vec<Article> = articles
        .iter()
        .filter(|a| a.status == status)
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
    rows
}

/// Check the caller may upload and the payload is non-empty.
pub(crate) fn check_upload(role: Role, bytes: &[u8]) -> Result<(), StoreError> {
    if !role.can_manage_posts() {
        return Err(StoreError::Unauthorized {
            role: role.as_str().to_string(),
            action: "upload files".to_string(),
        });
    }
    if bytes.is_empty() {
        return Err(StoreError::EmptyUpload);
    }
    Ok(())
}

/// Content-addressed name: `{sha256 hex}.{ext}`, keeping a short alphanumeric
/// extension from `file_name` when there is one.
pub fn upload_name(bytes: &[u8], file_name: &str) -> String {
    let digest = content_digest_hex(bytes);
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .filter(|e| !e.is_empty() && e.len() <= 8 && e.chars().all(|c| c.is_ascii_alphanumeric()));
    match ext {
        Some(ext) => format!("{}.{}", digest, ext),
        None => digest,
    }
}
