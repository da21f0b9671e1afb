use std::sync::Arc;

use crate::config::Config;
use crate::documents::DocumentExtractor;
use crate::screening::summarizer::Summarizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Default: PdfExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
    /// `None` when no summarizer credential is configured.
    pub summarizer: Option<Arc<dyn Summarizer>>,
}
