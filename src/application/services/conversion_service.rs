use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use crate::application::ports::{ConverterError, DocumentConverter, FileUploader, UploadError};

const INPUT_FILE: &str = "input.pdf";
const OUTPUT_FILE: &str = "output.docx";

/// PDF → Word conversion followed by upload of the result.
///
/// Each call works inside its own temporary directory, which is removed on
/// every exit path: explicitly after the pipeline finishes and by `TempDir`'s
/// destructor if the future is dropped or panics midway.
pub struct ConversionService {
    converter: Arc<dyn DocumentConverter>,
    uploader: Arc<dyn FileUploader>,
    temp_root: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedDocument {
    pub filename: String,
    pub docx_url: String,
}

const PDF_SUFFIX: &str = ".pdf";

/// Suffix check, case-insensitive. A bare `.pdf` qualifies.
pub fn is_pdf_filename(filename: &str) -> bool {
    pdf_stem(filename).is_some()
}

fn pdf_stem(filename: &str) -> Option<&str> {
    let split = filename.len().checked_sub(PDF_SUFFIX.len())?;
    let (stem, suffix) = (filename.get(..split)?, filename.get(split..)?);
    suffix.eq_ignore_ascii_case(PDF_SUFFIX).then_some(stem)
}

/// `report.pdf` becomes `report.docx`; an empty stem falls back to `document`.
pub fn docx_filename(pdf_filename: &str) -> String {
    let name = Path::new(pdf_filename)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(pdf_filename);
    let stem = match pdf_stem(name) {
        Some(stem) => stem,
        None => Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default(),
    };
    if stem.is_empty() {
        "document.docx".to_string()
    } else {
        format!("{stem}.docx")
    }
}

impl ConversionService {
    pub fn new(
        converter: Arc<dyn DocumentConverter>,
        uploader: Arc<dyn FileUploader>,
        temp_root: Option<PathBuf>,
    ) -> Self {
        Self {
            converter,
            uploader,
            temp_root,
        }
    }

    fn create_workspace(&self) -> Result<TempDir, ConversionError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("docdigest-");
        let workspace = match &self.temp_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        };
        workspace.map_err(ConversionError::Workspace)
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn convert_to_word(
        &self,
        filename: &str,
        data: &[u8],
    ) -> Result<ConvertedDocument, ConversionError> {
        if !is_pdf_filename(filename) {
            return Err(ConversionError::NotPdf(filename.to_string()));
        }

        let workspace = self.create_workspace()?;
        tracing::debug!(workspace = %workspace.path().display(), "Created conversion workspace");

        let result = self.run_in(workspace.path(), filename, data).await;

        if let Err(e) = workspace.close() {
            tracing::warn!(error = %e, "Failed to remove conversion workspace");
        }

        result
    }

    async fn run_in(
        &self,
        workspace: &Path,
        filename: &str,
        data: &[u8],
    ) -> Result<ConvertedDocument, ConversionError> {
        let pdf_path = workspace.join(INPUT_FILE);
        let docx_path = workspace.join(OUTPUT_FILE);

        tokio::fs::write(&pdf_path, data)
            .await
            .map_err(ConversionError::Workspace)?;

        self.converter.convert(&pdf_path, &docx_path).await?;

        let output_name = docx_filename(filename);
        let docx_url = self.uploader.upload(&docx_path, &output_name).await?;

        tracing::info!(docx_url = %docx_url, "Converted document uploaded");
        Ok(ConvertedDocument {
            filename: output_name,
            docx_url,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("only PDF files are allowed, got {0}")]
    NotPdf(String),
    #[error("temporary workspace: {0}")]
    Workspace(std::io::Error),
    #[error("conversion: {0}")]
    Conversion(#[from] ConverterError),
    #[error("upload: {0}")]
    Upload(#[from] UploadError),
}
