//! Axum route handlers for the Analysis API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::workflow::{run_analysis, AnalysisInput, AnalysisOutcome, FailureKind};
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

/// Label used when the resume was pasted rather than named.
const DEFAULT_RESUME_FILENAME: &str = "pasted-text.txt";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_description_id: Uuid,
    pub resume_text: String,
    pub resume_filename: Option<String>,
}

/// `{success: true, data}` or `{success: false, error}`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyses
///
/// Runs the analysis workflow for one resume against a stored JD.
/// Successful results are prepended to the session's result list.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<AnalyzeResponse>), AppError> {
    // Snapshot the JD and release the lock before any remote call
    let job_description = state
        .dashboard
        .read()
        .await
        .job_description(request.job_description_id)
        .cloned()
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Job description {} not found",
                request.job_description_id
            ))
        })?;

    let resume_filename = request
        .resume_filename
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_RESUME_FILENAME.to_string());

    let input = AnalysisInput {
        job_description,
        resume_text: request.resume_text,
        resume_filename,
    };

    match run_analysis(&state.services, input).await {
        AnalysisOutcome::Success(result) => {
            state.dashboard.write().await.record_result(result.clone());
            Ok((
                StatusCode::CREATED,
                Json(AnalyzeResponse {
                    success: true,
                    data: Some(result),
                    error: None,
                }),
            ))
        }
        AnalysisOutcome::Failure(failure) => {
            let status = match failure.kind {
                FailureKind::Validation => StatusCode::BAD_REQUEST,
                FailureKind::Service => StatusCode::SERVICE_UNAVAILABLE,
            };
            Ok((
                status,
                Json(AnalyzeResponse {
                    success: false,
                    data: None,
                    error: Some(failure.message),
                }),
            ))
        }
    }
}
