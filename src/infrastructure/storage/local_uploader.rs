use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{FileUploader, UploadError};
use crate::domain::{DocumentId, StoragePath};

/// Copies uploads into a local directory that is served back over HTTP.
pub struct LocalUploader {
    inner: Arc<LocalFileSystem>,
    root: PathBuf,
    public_base_url: String,
}

impl LocalUploader {
    pub fn new(root: PathBuf, public_base_url: &str) -> Result<Self, UploadError> {
        std::fs::create_dir_all(&root)?;
        let fs = LocalFileSystem::new_with_prefix(&root)
            .map_err(|e| UploadError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            root,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl FileUploader for LocalUploader {
    #[tracing::instrument(skip(self, path), fields(filename = %filename))]
    async fn upload(&self, path: &Path, filename: &str) -> Result<String, UploadError> {
        let bytes = tokio::fs::read(path).await?;
        let storage_path = StoragePath::new(&DocumentId::new(), filename);
        let store_path = StorePath::from(storage_path.as_str());

        self.inner
            .put(&store_path, PutPayload::from(bytes))
            .await
            .map_err(|e| UploadError::UploadFailed(e.to_string()))?;

        let url = format!("{}/{}", self.public_base_url, storage_path);
        tracing::info!(url = %url, "Stored file locally");
        Ok(url)
    }
}
