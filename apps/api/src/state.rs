use std::sync::Arc;

use crate::config::Config;
use crate::screening::criteria::EligibilityCriteria;
use crate::screening::extractor::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup; shared with the blocking screening tasks.
    pub criteria: Arc<EligibilityCriteria>,
    /// Pluggable text extractor. Default: DocumentTextExtractor (lopdf + UTF-8).
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(config: Config, extractor: Arc<dyn TextExtractor>) -> Self {
        let criteria = Arc::new(config.criteria.clone());
        AppState {
            config,
            criteria,
            extractor,
        }
    }
}
