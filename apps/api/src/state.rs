use std::sync::Arc;

use tokio::sync::RwLock;

use crate::analysis::services::AnalysisServices;
use crate::dashboard::store::Dashboard;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Skill extraction, relevance scoring and feedback. LLM-backed in production.
    pub services: AnalysisServices,
    /// The dashboard session. Lost on restart.
    pub dashboard: Arc<RwLock<Dashboard>>,
}

impl AppState {
    pub fn new(services: AnalysisServices) -> Self {
        Self {
            services,
            dashboard: Arc::new(RwLock::new(Dashboard::new())),
        }
    }
}
