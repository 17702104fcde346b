use sha2::{Digest, Sha256};

use crate::types::SeoMetadata;

/// Fingerprint of the user-visible SEO fields:
/// sha256(len(title) + title + len(description) + description + len(slug) + slug + len(keywords) + keywords).
/// Length prefixes keep field boundaries unambiguous.
pub fn metadata_fingerprint(metadata: &SeoMetadata) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for field in [
        &metadata.seo_title,
        &metadata.meta_description,
        &metadata.slug,
        &metadata.keywords,
    ] {
        hasher.update((field.len() as u64).to_be_bytes());
        hasher.update(field.as_bytes());
    }
    hasher.finalize().into()
}

/// True when author-saved metadata no longer matches what derivation produces now.
pub fn is_stale(saved: &SeoMetadata, derived: &SeoMetadata) -> bool {
    metadata_fingerprint(saved) != metadata_fingerprint(derived)
}

/// Lowercase hex sha256 of `bytes`, used to content-address uploads.
pub fn content_digest_hex(bytes: &[u8]) -> String {
    let digest: [u8; 32] = Sha256::digest(bytes).into();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
