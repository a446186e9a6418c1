use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{ConverterError, FileLoaderError, SummarizerError};
use crate::application::services::{ConversionError, SummarizationError};
use crate::domain::ContentType;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Status code and message returned to the client as `{"error": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unsupported_media_type(content_type: &str) -> Self {
        Self::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!(
                "Unsupported file type: {}. Allowed types: {}",
                content_type,
                ContentType::accepted_mimes()
            ),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "Request failed");
        } else {
            tracing::warn!(status = %self.status, error = %self.message, "Request rejected");
        }

        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<SummarizationError> for ApiError {
    fn from(err: SummarizationError) -> Self {
        match err {
            SummarizationError::FileLoading(FileLoaderError::UnsupportedContentType(ct)) => {
                Self::unsupported_media_type(&ct)
            }
            SummarizationError::FileLoading(FileLoaderError::InvalidEncoding(detail)) => {
                Self::bad_request(format!("Text file is not valid UTF-8: {detail}"))
            }
            SummarizationError::FileLoading(FileLoaderError::ExtractionFailed(detail)) => {
                Self::bad_request(format!("Failed to extract text: {detail}"))
            }
            SummarizationError::FileLoading(FileLoaderError::NoTextFound(_))
            | SummarizationError::NoTextExtracted => {
                Self::bad_request("No text could be extracted from the document")
            }
            SummarizationError::EmptySummary => {
                Self::bad_request("Could not generate summary from the extracted text")
            }
            SummarizationError::Splitting(e) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            SummarizationError::Summarizer(
                e @ (SummarizerError::RateLimited | SummarizerError::ModelUnavailable(_)),
            ) => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Summarization model unavailable: {e}"),
            ),
            SummarizationError::Summarizer(e) => Self::new(
                StatusCode::BAD_GATEWAY,
                format!("Summarization failed: {e}"),
            ),
        }
    }
}

impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::NotPdf(_) => Self::bad_request("Only PDF files are allowed"),
            ConversionError::Conversion(ConverterError::Timeout) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Conversion to Word timed out",
            ),
            ConversionError::Conversion(e) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create Word document: {e}"),
            ),
            ConversionError::Upload(e) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to upload converted document: {e}"),
            ),
            ConversionError::Workspace(e) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to prepare conversion workspace: {e}"),
            ),
        }
    }
}
