/// Ordered summary fragments produced for the retained chunks of one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    fragments: Vec<String>,
    pub chunks_total: usize,
    pub chunks_skipped: usize,
}

impl Summary {
    pub fn new(fragments: Vec<String>, chunks_total: usize, chunks_skipped: usize) -> Self {
        Self {
            fragments,
            chunks_total,
            chunks_skipped,
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(|f| f.trim().is_empty())
    }

    /// Fragments joined by a single space, in chunk order.
    pub fn text(&self) -> String {
        self.fragments.join(" ")
    }
}
