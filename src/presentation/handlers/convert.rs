use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::application::services::is_pdf_filename;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::upload::read_file_upload;

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub docx_url: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn convert_to_word_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ConvertResponse>, ApiError> {
    let upload = read_file_upload(&mut multipart, |filename, _| {
        if is_pdf_filename(filename) {
            Ok(())
        } else {
            Err(ApiError::bad_request("Only PDF files are allowed"))
        }
    })
    .await?;

    let converted = state
        .conversion_service
        .convert_to_word(&upload.filename, &upload.data)
        .await?;

    Ok(Json(ConvertResponse {
        docx_url: converted.docx_url,
    }))
}
