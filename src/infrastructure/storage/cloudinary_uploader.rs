use std::collections::BTreeMap;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::application::ports::{FileUploader, UploadError};

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Signed raw-resource uploads to Cloudinary. Signatures use SHA-256, which
/// must match the signature algorithm configured on the account.
pub struct CloudinaryUploader {
    client: Client,
    upload_url: String,
    api_key: String,
    api_secret: String,
    folder: Option<String>,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    error: Option<UploadErrorBody>,
}

#[derive(Deserialize)]
struct UploadErrorBody {
    message: String,
}

impl CloudinaryUploader {
    pub fn new(
        cloud_name: &str,
        api_key: &str,
        api_secret: &str,
        folder: Option<String>,
    ) -> Result<Self, UploadError> {
        let client = Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .map_err(|e| UploadError::UploadFailed(e.to_string()))?;

        Ok(Self {
            client,
            upload_url: format!("https://api.cloudinary.com/v1_1/{cloud_name}/raw/upload"),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
            folder: folder.filter(|f| !f.trim().is_empty()),
        })
    }

    fn signed_params(&self, timestamp: u64) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();
        params.insert("timestamp", timestamp.to_string());
        params.insert("use_filename", "true".to_string());
        params.insert("unique_filename", "true".to_string());
        if let Some(folder) = &self.folder {
            params.insert("folder", folder.clone());
        }
        params
    }
}

/// Cloudinary request signature: the sorted `key=value` pairs joined by `&`,
/// followed by the API secret, hashed and hex encoded.
pub fn sign_params(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let to_sign = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl FileUploader for CloudinaryUploader {
    #[tracing::instrument(skip(self, path), fields(filename = %filename))]
    async fn upload(&self, path: &Path, filename: &str) -> Result<String, UploadError> {
        let bytes = tokio::fs::read(path).await?;
        let size = bytes.len();

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| UploadError::UploadFailed(e.to_string()))?
            .as_secs();
        let params = self.signed_params(timestamp);
        let signature = sign_params(&params, &self.api_secret);

        let mut form = Form::new()
            .part("file", Part::bytes(bytes).file_name(filename.to_string()))
            .text("api_key", self.api_key.clone())
            .text("signature", signature);
        for (key, value) in params {
            form = form.text(key, value);
        }

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::UploadFailed(e.to_string()))?;

        let status = response.status();
        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::UploadFailed(format!("HTTP {status}: {e}")))?;

        if let Some(error) = body.error {
            return Err(UploadError::UploadFailed(error.message));
        }
        if !status.is_success() {
            return Err(UploadError::UploadFailed(format!("HTTP {status}")));
        }

        let url = body
            .secure_url
            .filter(|u| !u.is_empty())
            .ok_or(UploadError::MissingUrl)?;

        tracing::info!(bytes = size, url = %url, "Uploaded file to Cloudinary");
        Ok(url)
    }
}
