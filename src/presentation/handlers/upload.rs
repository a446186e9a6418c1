use axum::body::Bytes;
use axum::extract::Multipart;

use super::error::ApiError;

const FILE_FIELD: &str = "file";

/// Upload read from the `file` part, plus whatever `accept` derived from its
/// name and content type.
pub struct FileUpload<T> {
    pub filename: String,
    pub accepted: T,
    pub data: Bytes,
}

/// Skips parts until the one named `file`. `accept` sees its filename and
/// content type before the body is read, so rejected uploads are never
/// buffered.
pub async fn read_file_upload<T, F>(
    multipart: &mut Multipart,
    accept: F,
) -> Result<FileUpload<T>, ApiError>
where
    F: Fn(&str, &str) -> Result<T, ApiError>,
{
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(ApiError::bad_request("No file uploaded")),
            Err(e) => {
                return Err(ApiError::bad_request(format!(
                    "Failed to read multipart: {e}"
                )));
            }
        };

        if field.name() != Some(FILE_FIELD) {
            tracing::debug!(field = ?field.name(), "Skipping multipart part");
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        tracing::debug!(filename = %filename, content_type = %content_type, "Processing upload");
        let accepted = accept(&filename, &content_type)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read file: {e}")))?;

        tracing::debug!(bytes = data.len(), "File data received");
        return Ok(FileUpload {
            filename,
            accepted,
            data,
        });
    }
}
