//! Analysis workflow — turns one JD snapshot and one resume into an `AnalysisResult`.
//!
//! Flow: validate → [extract JD skills ‖ extract resume skills ‖ score relevance]
//!       → skill gap → feedback (only when skills are missing) → assemble.
//!
//! The workflow is stateless: it touches nothing but the services it is handed,
//! and never reports failure as an `Err`. Callers get an `AnalysisOutcome`.

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::analysis::schema::{ExtractSkillsRequest, FeedbackRequest, ScoreRelevanceRequest};
use crate::analysis::services::{AnalysisServices, ServiceError};
use crate::analysis::skill_gap::{dedup_skills, missing_skills};
use crate::models::analysis::AnalysisResult;
use crate::models::job_description::JobDescription;

/// Minimum resume length, in characters.
pub const MIN_RESUME_CHARS: usize = 50;

/// Shown for every remote or unexpected failure. Details go to the log only.
pub const SERVICE_FAILURE_MESSAGE: &str =
    "An unexpected error occurred during analysis. The AI model may be overloaded.";

#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub job_description: JobDescription,
    pub resume_text: String,
    pub resume_filename: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Input rejected before any remote call.
    Validation,
    /// A remote call failed or returned an invalid response.
    Service,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisFailure {
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Success(AnalysisResult),
    Failure(AnalysisFailure),
}

#[derive(Debug, Error)]
enum AnalysisError {
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Runs one analysis end to end.
pub async fn run_analysis(services: &AnalysisServices, input: AnalysisInput) -> AnalysisOutcome {
    match analyze(services, input).await {
        Ok(result) => AnalysisOutcome::Success(result),
        Err(AnalysisError::Validation(messages)) => AnalysisOutcome::Failure(AnalysisFailure {
            kind: FailureKind::Validation,
            message: messages.join(", "),
        }),
        Err(AnalysisError::Service(e)) => {
            error!("Analysis error: {e}");
            AnalysisOutcome::Failure(AnalysisFailure {
                kind: FailureKind::Service,
                message: SERVICE_FAILURE_MESSAGE.to_string(),
            })
        }
    }
}

fn validate_input(input: &AnalysisInput) -> Result<(), AnalysisError> {
    let mut messages = Vec::new();

    if input.job_description.text.trim().is_empty() {
        messages.push("Job description text cannot be empty.".to_string());
    }
    if input.resume_text.chars().count() < MIN_RESUME_CHARS {
        messages.push(format!(
            "Resume text must be at least {MIN_RESUME_CHARS} characters."
        ));
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::Validation(messages))
    }
}

async fn analyze(
    services: &AnalysisServices,
    input: AnalysisInput,
) -> Result<AnalysisResult, AnalysisError> {
    validate_input(&input)?;

    let AnalysisInput {
        job_description: jd,
        resume_text,
        resume_filename,
    } = input;

    info!(
        "Analyzing '{}' against JD {} ({})",
        resume_filename, jd.id, jd.role
    );

    // Step 1: fan out, then wait for all three before looking at any result
    let jd_request = ExtractSkillsRequest {
        text: jd.text.clone(),
    };
    let resume_request = ExtractSkillsRequest {
        text: resume_text.clone(),
    };
    let score_request = ScoreRelevanceRequest {
        resume_text: resume_text.clone(),
        job_description_text: jd.text.clone(),
    };

    let (jd_skills, resume_skills, score) = tokio::join!(
        services.skills.extract_skills(&jd_request),
        services.skills.extract_skills(&resume_request),
        services.scorer.score_relevance(&score_request),
    );
    let jd_skills = jd_skills?.skills;
    let resume_skills = dedup_skills(&resume_skills?.skills);
    let score = score?;

    // Step 2: skill gap
    let missing = missing_skills(&jd_skills, &resume_skills);

    // Step 3: feedback only when something is missing
    let suggestions = if missing.is_empty() {
        Vec::new()
    } else {
        let request = FeedbackRequest {
            job_description: jd.text.clone(),
            resume_text,
            missing_skills: missing.clone(),
        };
        services.feedback.generate_feedback(&request).await?.suggestions
    };

    // Step 4: assemble
    let result = AnalysisResult {
        id: Uuid::new_v4(),
        relevance_score: score.relevance_score,
        hard_match_score: score.hard_match_score,
        semantic_match_score: score.semantic_match_score,
        verdict: score.verdict,
        job_role: jd.role,
        location: jd.location,
        resume_filename,
        jd_skills,
        resume_skills,
        missing_skills: missing,
        suggestions,
        analyzed_at: Utc::now(),
    };

    info!(
        "Analysis {} complete: score={} verdict={} missing={}",
        result.id,
        result.relevance_score,
        result.verdict,
        result.missing_skills.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use super::*;
    use crate::analysis::testing::{job_description, MockServices, RESUME_TEXT};

    fn input_for(mock: &MockServices, resume_text: &str) -> AnalysisInput {
        AnalysisInput {
            job_description: job_description(&mock.jd_text),
            resume_text: resume_text.to_string(),
            resume_filename: "candidate.txt".to_string(),
        }
    }

    async fn run(mock: &Arc<MockServices>, resume_text: &str) -> AnalysisOutcome {
        run_analysis(&mock.services(), input_for(mock, resume_text)).await
    }

    fn expect_success(outcome: AnalysisOutcome) -> AnalysisResult {
        match outcome {
            AnalysisOutcome::Success(result) => result,
            AnalysisOutcome::Failure(f) => panic!("expected success, got {f:?}"),
        }
    }

    fn expect_failure(outcome: AnalysisOutcome) -> AnalysisFailure {
        match outcome {
            AnalysisOutcome::Failure(f) => f,
            AnalysisOutcome::Success(r) => panic!("expected failure, got {r:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_skills_drive_single_feedback_call() {
        let mock = Arc::new(MockServices::new(
            &["Python", "SQL", "Docker"],
            &["python", "Kubernetes"],
        ));

        let outcome = run(&mock, RESUME_TEXT).await;
        let result = expect_success(outcome);

        assert_eq!(result.missing_skills, vec!["sql", "docker"]);
        assert_eq!(result.jd_skills, vec!["Python", "SQL", "Docker"]);
        assert_eq!(result.resume_skills, vec!["python", "Kubernetes"]);
        assert_eq!(result.suggestions, mock.suggestions);

        assert_eq!(mock.feedback_calls.load(Ordering::SeqCst), 1);
        let requests = mock.feedback_requests.lock().unwrap();
        assert_eq!(requests[0].missing_skills, vec!["sql", "docker"]);
        assert_eq!(requests[0].resume_text, RESUME_TEXT);
        assert_eq!(requests[0].job_description, mock.jd_text);
    }

    #[tokio::test]
    async fn test_full_coverage_skips_feedback() {
        let mock = Arc::new(MockServices::new(&["Java"], &["java"]));

        let result = expect_success(run(&mock, RESUME_TEXT).await);

        assert!(result.missing_skills.is_empty());
        assert!(result.suggestions.is_empty());
        assert_eq!(mock.feedback_calls.load(Ordering::SeqCst), 0);
        assert_eq!(mock.extract_calls.load(Ordering::SeqCst), 2);
        assert_eq!(mock.score_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_short_resume_fails_without_remote_calls() {
        let mock = Arc::new(MockServices::new(&["Python"], &[]));
        let resume = "a".repeat(40);

        let failure = expect_failure(run(&mock, &resume).await);

        assert_eq!(failure.kind, FailureKind::Validation);
        assert_eq!(failure.message, "Resume text must be at least 50 characters.");
        assert_eq!(mock.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_resume_length_counts_characters_not_bytes() {
        let mock = Arc::new(MockServices::new(&["Python"], &["Python"]));
        // 25 two-byte characters: 50 bytes but only 25 characters
        let resume = "é".repeat(25);

        let failure = expect_failure(run(&mock, &resume).await);
        assert_eq!(failure.kind, FailureKind::Validation);
        assert_eq!(mock.total_calls(), 0);

        let resume = "é".repeat(MIN_RESUME_CHARS);
        expect_success(run(&mock, &resume).await);
    }

    #[tokio::test]
    async fn test_validation_messages_are_concatenated() {
        let mock = Arc::new(MockServices::new(&["Python"], &[]));
        let mut input = input_for(&mock, "too short");
        input.job_description.text = "   ".to_string();

        let failure = expect_failure(run_analysis(&mock.services(), input).await);
        assert_eq!(
            failure.message,
            "Job description text cannot be empty., Resume text must be at least 50 characters."
        );
        assert_eq!(mock.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_scoring_failure_aborts_before_feedback() {
        let mut mock = MockServices::new(&["Python", "SQL"], &["Python"]);
        mock.fail_scoring = true;
        let mock = Arc::new(mock);

        let failure = expect_failure(run(&mock, RESUME_TEXT).await);

        assert_eq!(failure.kind, FailureKind::Service);
        assert_eq!(failure.message, SERVICE_FAILURE_MESSAGE);
        assert_eq!(mock.feedback_calls.load(Ordering::SeqCst), 0);
        // join barrier: both extractions still ran to completion
        assert_eq!(mock.extract_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_extraction_failure_aborts_before_feedback() {
        let mut mock = MockServices::new(&["Python", "SQL"], &["Python"]);
        mock.fail_resume_extraction = true;
        let mock = Arc::new(mock);

        let failure = expect_failure(run(&mock, RESUME_TEXT).await);

        assert_eq!(failure.kind, FailureKind::Service);
        assert_eq!(mock.feedback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_jd_extraction_failure_aborts_before_feedback() {
        let mut mock = MockServices::new(&["Python", "SQL"], &["Python"]);
        mock.fail_jd_extraction = true;
        let mock = Arc::new(mock);

        let failure = expect_failure(run(&mock, RESUME_TEXT).await);

        assert_eq!(failure.kind, FailureKind::Service);
        assert_eq!(failure.message, SERVICE_FAILURE_MESSAGE);
        assert_eq!(mock.extract_calls.load(Ordering::SeqCst), 2);
        assert_eq!(mock.score_calls.load(Ordering::SeqCst), 1);
        assert_eq!(mock.feedback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_feedback_failure_fails_whole_analysis() {
        let mut mock = MockServices::new(&["Python", "SQL"], &["Python"]);
        mock.fail_feedback = true;
        let mock = Arc::new(mock);

        let failure = expect_failure(run(&mock, RESUME_TEXT).await);

        assert_eq!(failure.message, SERVICE_FAILURE_MESSAGE);
        assert_eq!(mock.feedback_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_scores_and_snapshot_fields_are_copied() {
        let mock = Arc::new(MockServices::new(&["Go"], &["Go"]));
        let input = input_for(&mock, RESUME_TEXT);
        let jd = input.job_description.clone();

        let result = expect_success(run_analysis(&mock.services(), input).await);

        assert_eq!(result.relevance_score, mock.score.relevance_score);
        assert_eq!(result.hard_match_score, mock.score.hard_match_score);
        assert_eq!(result.semantic_match_score, mock.score.semantic_match_score);
        assert_eq!(result.verdict, mock.score.verdict);
        assert_eq!(result.job_role, jd.role);
        assert_eq!(result.location, jd.location);
        assert_eq!(result.resume_filename, "candidate.txt");
    }

    #[tokio::test]
    async fn test_repeated_runs_differ_only_in_id_and_timestamp() {
        let mock = Arc::new(MockServices::new(
            &["Rust", "Kafka", "SQL", "rust"],
            &["SQL", "Terraform", "sql"],
        ));

        let first = expect_success(run(&mock, RESUME_TEXT).await);
        let second = expect_success(run(&mock, RESUME_TEXT).await);

        assert_ne!(first.id, second.id);
        assert_eq!(first.missing_skills, vec!["rust", "kafka"]);
        assert_eq!(
            AnalysisResult {
                id: first.id,
                analyzed_at: first.analyzed_at,
                ..second
            },
            first
        );
        assert_eq!(first.resume_skills, vec!["SQL", "Terraform"]);
    }
}
