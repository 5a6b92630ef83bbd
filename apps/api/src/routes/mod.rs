pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::dashboard::handlers as dashboard;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job descriptions
        .route("/api/v1/locations", get(dashboard::handle_list_locations))
        .route(
            "/api/v1/job-descriptions",
            get(dashboard::handle_list_job_descriptions)
                .post(dashboard::handle_create_job_description),
        )
        // Analysis
        .route("/api/v1/analyses", post(analysis::handle_analyze))
        // Results & analytics
        .route("/api/v1/results", get(dashboard::handle_list_results))
        .route(
            "/api/v1/results/locations",
            get(dashboard::handle_result_locations),
        )
        .route("/api/v1/analytics", get(dashboard::handle_analytics))
        .with_state(state)
}
