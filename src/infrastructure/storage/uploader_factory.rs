use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::FileUploader;
use crate::presentation::config::{StorageProvider, StorageSettings};

use super::cloudinary_uploader::CloudinaryUploader;
use super::local_uploader::LocalUploader;

#[derive(Debug, thiserror::Error)]
pub enum UploaderFactoryError {
    #[error("{0} is required for the Cloudinary storage provider")]
    MissingCredential(&'static str),
    #[error("uploader initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct UploaderFactory;

impl UploaderFactory {
    /// Fails when the selected provider is missing credentials, so the process
    /// refuses to start instead of failing on the first conversion.
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn FileUploader>, UploaderFactoryError> {
        match settings.provider {
            StorageProvider::Cloudinary => {
                let cloudinary = &settings.cloudinary;
                let cloud_name = required(&cloudinary.cloud_name, "cloud_name")?;
                let api_key = required(&cloudinary.api_key, "api_key")?;
                let api_secret = required(&cloudinary.api_secret, "api_secret")?;
                let uploader = CloudinaryUploader::new(
                    cloud_name,
                    api_key,
                    api_secret,
                    cloudinary.folder.clone(),
                )
                .map_err(|e| UploaderFactoryError::InitializationFailed(e.to_string()))?;
                tracing::info!(cloud_name, "Using Cloudinary uploader");
                Ok(Arc::new(uploader))
            }
            StorageProvider::Local => {
                let uploader = LocalUploader::new(
                    PathBuf::from(&settings.local.path),
                    &settings.local.public_base_url,
                )
                .map_err(|e| UploaderFactoryError::InitializationFailed(e.to_string()))?;
                tracing::info!(path = %settings.local.path, "Using local uploader");
                Ok(Arc::new(uploader))
            }
        }
    }
}

fn required<'a>(
    value: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, UploaderFactoryError> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(UploaderFactoryError::MissingCredential(name))
}
