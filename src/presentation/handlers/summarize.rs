use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::domain::ContentType;
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::upload::read_file_upload;

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub filename: String,
    pub summary: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn summarize_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let upload = read_file_upload(&mut multipart, |_, content_type| {
        ContentType::from_mime(content_type)
            .ok_or_else(|| ApiError::unsupported_media_type(content_type))
    })
    .await?;

    let result = state
        .summarization_service
        .summarize_document(&upload.data, upload.filename, upload.accepted)
        .await?;

    let summary = result.summary.text();
    tracing::info!(
        filename = %result.document.filename,
        fragments = result.summary.fragments().len(),
        chunks_skipped = result.summary.chunks_skipped,
        summary = %preview_text(&summary),
        "Document summarized"
    );

    Ok(Json(SummarizeResponse {
        filename: result.document.filename,
        summary,
    }))
}
