//! Content store error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed article data: {0}")]
    Json(#[from] serde_json::Error),

    /// Uploads must carry at least one byte.
    #[error("Refusing to upload an empty file")]
    EmptyUpload,

    /// The signed-in role may not perform the operation.
    #[error("Role '{role}' is not allowed to {action}")]
    Unauthorized { role: String, action: String },
}
