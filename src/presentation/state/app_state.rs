use std::sync::Arc;

use crate::application::services::{ConversionService, SummarizationService};

/// Services shared by every request. Built once in `main` and read-only after.
#[derive(Clone)]
pub struct AppState {
    pub summarization_service: Arc<SummarizationService>,
    pub conversion_service: Arc<ConversionService>,
}
