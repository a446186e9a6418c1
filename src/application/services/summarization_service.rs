use std::sync::Arc;

use futures::{StreamExt, TryStreamExt};

use crate::application::ports::{
    FileLoader, FileLoaderError, Summarizer, SummarizerError, SummaryBounds, TextSplitter,
    TextSplitterError,
};
use crate::domain::{ContentType, Document, Summary};

use super::text_normalizer::TextNormalizer;

pub const DEFAULT_MIN_CHUNK_WORDS: usize = 50;

#[derive(Debug, Clone, Copy)]
pub struct SummarizationOptions {
    pub normalizer: TextNormalizer,
    /// Chunks with fewer whitespace separated words are dropped unsummarized.
    pub min_chunk_words: usize,
    pub bounds: SummaryBounds,
    /// Chunks summarized at once; fragments keep chunk order regardless.
    pub concurrency: usize,
}

impl Default for SummarizationOptions {
    fn default() -> Self {
        Self {
            normalizer: TextNormalizer::default(),
            min_chunk_words: DEFAULT_MIN_CHUNK_WORDS,
            bounds: SummaryBounds::default(),
            concurrency: 1,
        }
    }
}

/// Extract → normalize → chunk → summarize pipeline behind `/summarize`.
pub struct SummarizationService {
    file_loader: Arc<dyn FileLoader>,
    text_splitter: Arc<dyn TextSplitter>,
    summarizer: Arc<dyn Summarizer>,
    options: SummarizationOptions,
}

#[derive(Debug, Clone)]
pub struct DocumentSummary {
    pub document: Document,
    pub summary: Summary,
}

impl SummarizationService {
    pub fn new(
        file_loader: Arc<dyn FileLoader>,
        text_splitter: Arc<dyn TextSplitter>,
        summarizer: Arc<dyn Summarizer>,
        options: SummarizationOptions,
    ) -> Self {
        Self {
            file_loader,
            text_splitter,
            summarizer,
            options,
        }
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn summarize_document(
        &self,
        data: &[u8],
        filename: String,
        content_type: ContentType,
    ) -> Result<DocumentSummary, SummarizationError> {
        let document = Document::new(filename, content_type, data.len() as u64);

        let text = self.extract_normalized(data, &document).await?;
        let summary = self.summarize_text(&text).await?;

        if summary.is_empty() {
            tracing::warn!(
                chunks_total = summary.chunks_total,
                chunks_skipped = summary.chunks_skipped,
                "No chunk qualified for summarization"
            );
            return Err(SummarizationError::EmptySummary);
        }

        Ok(DocumentSummary { document, summary })
    }

    /// Extracted text after normalization. Fails when nothing usable remains.
    pub async fn extract_normalized(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, SummarizationError> {
        let raw = match self.file_loader.extract_text(data, document).await {
            Ok(raw) => raw,
            Err(FileLoaderError::NoTextFound(_)) => return Err(SummarizationError::NoTextExtracted),
            Err(e) => return Err(SummarizationError::FileLoading(e)),
        };

        let text = self.options.normalizer.normalize(&raw);
        if text.is_empty() {
            return Err(SummarizationError::NoTextExtracted);
        }

        tracing::debug!(
            raw_chars = raw.len(),
            normalized_chars = text.len(),
            "Text extracted"
        );
        Ok(text)
    }

    /// Summarizes already normalized text. The result is empty when every
    /// chunk falls below the word threshold.
    pub async fn summarize_text(&self, text: &str) -> Result<Summary, SummarizationError> {
        let chunks = self.text_splitter.split(text)?;
        let chunks_total = chunks.len();

        let retained: Vec<_> = chunks
            .into_iter()
            .filter(|chunk| chunk.word_count() >= self.options.min_chunk_words)
            .collect();
        let chunks_skipped = chunks_total - retained.len();

        tracing::debug!(chunks_total, chunks_skipped, "Text split into chunks");

        // Owned chunks and handle: the handler future must stay `Send`.
        let bounds = self.options.bounds;
        let summarizer = Arc::clone(&self.summarizer);
        let fragments: Vec<String> = futures::stream::iter(retained)
            .map(move |chunk| {
                let summarizer = Arc::clone(&summarizer);
                async move { summarizer.summarize(&chunk.text, bounds).await }
            })
            .buffered(self.options.concurrency.max(1))
            .try_collect()
            .await?;

        tracing::info!(
            fragments = fragments.len(),
            chunks_skipped,
            "Chunk summaries generated"
        );

        Ok(Summary::new(fragments, chunks_total, chunks_skipped))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("file loading: {0}")]
    FileLoading(#[from] FileLoaderError),
    #[error("no text could be extracted from the document")]
    NoTextExtracted,
    #[error("text splitting: {0}")]
    Splitting(#[from] TextSplitterError),
    #[error("summarization: {0}")]
    Summarizer(#[from] SummarizerError),
    #[error("could not generate a summary from the extracted text")]
    EmptySummary,
}
