//! Axum route handlers for the dashboard session.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::dashboard::analytics::AnalyticsReport;
use crate::dashboard::store::ResultFilter;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::models::job_description::{JobDescription, Location, NewJobDescription};
use crate::state::AppState;

/// GET /api/v1/locations
///
/// Location choices offered by the upload form.
pub async fn handle_list_locations() -> Json<Vec<String>> {
    Json(Location::PRESETS.into_iter().map(String::from).collect())
}

/// POST /api/v1/job-descriptions
pub async fn handle_create_job_description(
    State(state): State<AppState>,
    Json(upload): Json<NewJobDescription>,
) -> Result<(StatusCode, Json<JobDescription>), AppError> {
    let jd = state.dashboard.write().await.add_job_description(upload)?;
    tracing::info!("Job description {} uploaded: {} ({})", jd.id, jd.role, jd.location);
    Ok((StatusCode::CREATED, Json(jd)))
}

/// GET /api/v1/job-descriptions
pub async fn handle_list_job_descriptions(
    State(state): State<AppState>,
) -> Json<Vec<JobDescription>> {
    Json(state.dashboard.read().await.job_descriptions())
}

/// GET /api/v1/results?location=&min_score=
pub async fn handle_list_results(
    State(state): State<AppState>,
    Query(filter): Query<ResultFilter>,
) -> Json<Vec<AnalysisResult>> {
    Json(state.dashboard.read().await.results(&filter))
}

/// GET /api/v1/results/locations
///
/// Distinct locations among completed analyses, for the results filter.
pub async fn handle_result_locations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dashboard.read().await.result_locations())
}

/// GET /api/v1/analytics
pub async fn handle_analytics(State(state): State<AppState>) -> Json<AnalyticsReport> {
    Json(state.dashboard.read().await.analytics())
}
