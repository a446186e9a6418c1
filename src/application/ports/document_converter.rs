use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait DocumentConverter: Send + Sync {
    /// Reads the PDF at `pdf_path` and writes a Word document to `docx_path`.
    async fn convert(&self, pdf_path: &Path, docx_path: &Path) -> Result<(), ConverterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConverterError {
    #[error("failed to read PDF: {0}")]
    InvalidPdf(String),
    #[error("failed to write Word document: {0}")]
    WriteFailed(String),
    #[error("conversion timed out")]
    Timeout,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
