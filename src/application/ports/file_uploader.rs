use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait FileUploader: Send + Sync {
    /// Uploads the local file and returns a URL it can be retrieved from.
    async fn upload(&self, path: &Path, filename: &str) -> Result<String, UploadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("upload returned no url")]
    MissingUrl,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
