use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::Chunk;

pub const DEFAULT_MAX_CHUNK_CHARS: usize = 1024;

/// Cuts text into consecutive, non-overlapping windows of `chunk_size`
/// characters. Boundaries ignore words and sentences; only the last chunk may
/// be shorter.
pub struct FixedCharacterSplitter {
    chunk_size: usize,
}

impl FixedCharacterSplitter {
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Default for FixedCharacterSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_CHARS)
    }
}

impl TextSplitter for FixedCharacterSplitter {
    fn split(&self, text: &str) -> Result<Vec<Chunk>, TextSplitterError> {
        if self.chunk_size == 0 {
            return Err(TextSplitterError::InvalidChunkSize(self.chunk_size));
        }

        let chars: Vec<char> = text.chars().collect();
        let total_len = chars.len();
        let mut chunks = Vec::with_capacity(total_len.div_ceil(self.chunk_size));

        let mut offset = 0;
        while offset < total_len {
            let end = (offset + self.chunk_size).min(total_len);
            let chunk_text: String = chars[offset..end].iter().collect();

            chunks.push(Chunk::new(chunks.len(), chunk_text, offset));

            offset = end;
        }

        Ok(chunks)
    }
}
