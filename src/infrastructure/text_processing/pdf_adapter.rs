use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::pdf_text_repair::repair_pdf_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);
const PAGE_BREAK: char = '\x0C';

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Pages of `pdf-extract` output, which separates them with form feeds.
    /// Blank pages are kept.
    pub fn split_pages(text: &str) -> impl Iterator<Item = &str> {
        text.split(PAGE_BREAK)
    }

    /// Extracts per-page text, skipping pages without any.
    pub fn extract_pages(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        let text = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        Ok(Self::split_pages(&text)
            .filter(|page| !page.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let bytes = data.to_vec();
        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&bytes)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let page_count = pages.len();
        tracing::info!(page_count, "PDF text extraction complete");

        if pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(pages
            .iter()
            .map(|page| repair_pdf_text(page))
            .collect::<Vec<_>>()
            .join(" "))
    }
}
