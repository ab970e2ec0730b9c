use std::sync::Arc;

use crate::analysis::orchestrator::Analyzer;
use crate::analysis::store::ResultStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    /// Latest-analysis slot, overwritten after every successful analysis.
    pub store: Arc<ResultStore>,
}
