use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use docx_rs::{BreakType, Docx, Paragraph, Run};

use crate::application::ports::{ConverterError, DocumentConverter};
use crate::application::services::normalize_text;
use crate::infrastructure::text_processing::{PdfAdapter, repair_pdf_text};

pub const DEFAULT_CONVERSION_TIMEOUT: Duration = Duration::from_secs(120);

/// Rebuilds the text layer of a PDF as a Word document: one paragraph per
/// text block, with a page break between source pages.
pub struct PdfToDocxConverter {
    timeout: Duration,
}

impl PdfToDocxConverter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn read_pages(pdf_path: &Path) -> Result<Vec<Vec<String>>, ConverterError> {
        let text = pdf_extract::extract_text(pdf_path)
            .map_err(|e| ConverterError::InvalidPdf(e.to_string()))?;

        Ok(PdfAdapter::split_pages(&text).map(page_paragraphs).collect())
    }

    fn write_docx(pages: &[Vec<String>], docx_path: &Path) -> Result<(), ConverterError> {
        let mut docx = Docx::new();

        for (index, paragraphs) in pages.iter().enumerate() {
            if index > 0 {
                docx = docx.add_paragraph(
                    Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
                );
            }
            for text in paragraphs {
                docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)));
            }
        }

        let file = std::fs::File::create(docx_path)?;
        docx.build()
            .pack(file)
            .map_err(|e| ConverterError::WriteFailed(e.to_string()))
    }

    fn run(pdf_path: &Path, docx_path: &Path) -> Result<usize, ConverterError> {
        let pages = Self::read_pages(pdf_path)?;
        Self::write_docx(&pages, docx_path)?;
        Ok(pages.len())
    }
}

impl Default for PdfToDocxConverter {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERSION_TIMEOUT)
    }
}

/// Blank lines separate blocks; lines inside a block are joined.
fn page_paragraphs(page: &str) -> Vec<String> {
    let repaired = repair_pdf_text(page);
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in repaired.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(normalize_text(&current));
                current.clear();
            }
        } else {
            current.push_str(line);
            current.push(' ');
        }
    }
    if !current.is_empty() {
        paragraphs.push(normalize_text(&current));
    }

    paragraphs
}

/// Runs `job` on the blocking pool. A blocking task cannot be cancelled, so on
/// timeout this still waits for it to finish; callers may then remove its
/// working directory without racing late writes.
async fn run_blocking<T, F>(timeout: Duration, job: F) -> Result<T, ConverterError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ConverterError> + Send + 'static,
{
    let mut handle = tokio::task::spawn_blocking(job);

    let joined = match tokio::time::timeout(timeout, &mut handle).await {
        Ok(joined) => joined,
        Err(_) => {
            tracing::warn!(
                timeout_secs = timeout.as_secs(),
                "Conversion timed out, waiting for worker to stop"
            );
            let _ = handle.await;
            return Err(ConverterError::Timeout);
        }
    };

    joined.map_err(|e| ConverterError::InvalidPdf(format!("task join error: {e}")))?
}

#[async_trait]
impl DocumentConverter for PdfToDocxConverter {
    #[tracing::instrument(skip(self), fields(pdf = %pdf_path.display()))]
    async fn convert(&self, pdf_path: &Path, docx_path: &Path) -> Result<(), ConverterError> {
        let input: PathBuf = pdf_path.to_path_buf();
        let output: PathBuf = docx_path.to_path_buf();

        let page_count = run_blocking(self.timeout, move || Self::run(&input, &output)).await?;

        if !docx_path.exists() {
            return Err(ConverterError::WriteFailed(
                "converter produced no output file".to_string(),
            ));
        }

        tracing::info!(page_count, "PDF converted to Word document");
        Ok(())
    }
}
