//! Analysis services — pluggable, trait-based adapters over the LLM.
//!
//! Default: `LlmAnalysisService` implements all three traits on top of `LlmClient`.
//! Tests plug in scripted implementations.
//!
//! `AppState` holds an `AnalysisServices` bundle of `Arc<dyn …>` handles.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::analysis::prompts::{
    fill_template, EXTRACT_SKILLS_PROMPT_TEMPLATE, FEEDBACK_PROMPT_TEMPLATE,
    SCORE_RELEVANCE_PROMPT_TEMPLATE,
};
use crate::analysis::schema::{
    ExtractSkillsRequest, ExtractSkillsResponse, FeedbackRequest, FeedbackResponse,
    SchemaError, ScoreRelevanceRequest, ScoreRelevanceResponse,
};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

/// Failure of a single remote service call.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Response failed schema validation: {0}")]
    Schema(#[from] SchemaError),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definitions
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract_skills(
        &self,
        request: &ExtractSkillsRequest,
    ) -> Result<ExtractSkillsResponse, ServiceError>;
}

#[async_trait]
pub trait RelevanceScorer: Send + Sync {
    async fn score_relevance(
        &self,
        request: &ScoreRelevanceRequest,
    ) -> Result<ScoreRelevanceResponse, ServiceError>;
}

#[async_trait]
pub trait FeedbackGenerator: Send + Sync {
    async fn generate_feedback(
        &self,
        request: &FeedbackRequest,
    ) -> Result<FeedbackResponse, ServiceError>;
}

/// The three services the analysis workflow depends on.
#[derive(Clone)]
pub struct AnalysisServices {
    pub skills: Arc<dyn SkillExtractor>,
    pub scorer: Arc<dyn RelevanceScorer>,
    pub feedback: Arc<dyn FeedbackGenerator>,
}

impl AnalysisServices {
    /// Backs all three services with the same LLM client.
    pub fn from_llm(llm: LlmClient) -> Self {
        let service = Arc::new(LlmAnalysisService(llm));
        Self {
            skills: service.clone(),
            scorer: service.clone(),
            feedback: service,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAnalysisService — prompt-backed implementation
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmAnalysisService(pub LlmClient);

#[async_trait]
impl SkillExtractor for LlmAnalysisService {
    async fn extract_skills(
        &self,
        request: &ExtractSkillsRequest,
    ) -> Result<ExtractSkillsResponse, ServiceError> {
        let prompt = fill_template(
            EXTRACT_SKILLS_PROMPT_TEMPLATE,
            &[("text", request.text.as_str())],
        );
        let response: ExtractSkillsResponse = self.0.call_json(&prompt, JSON_ONLY_SYSTEM).await?;
        Ok(response.validate()?)
    }
}

#[async_trait]
impl RelevanceScorer for LlmAnalysisService {
    async fn score_relevance(
        &self,
        request: &ScoreRelevanceRequest,
    ) -> Result<ScoreRelevanceResponse, ServiceError> {
        let prompt = build_score_prompt(request);
        let response: ScoreRelevanceResponse =
            self.0.call_json(&prompt, JSON_ONLY_SYSTEM).await?;
        Ok(response.validate()?)
    }
}

#[async_trait]
impl FeedbackGenerator for LlmAnalysisService {
    async fn generate_feedback(
        &self,
        request: &FeedbackRequest,
    ) -> Result<FeedbackResponse, ServiceError> {
        let prompt = build_feedback_prompt(request);
        let response: FeedbackResponse = self.0.call_json(&prompt, JSON_ONLY_SYSTEM).await?;
        Ok(response.validate()?)
    }
}

fn build_score_prompt(request: &ScoreRelevanceRequest) -> String {
    fill_template(
        SCORE_RELEVANCE_PROMPT_TEMPLATE,
        &[
            ("resume_text", request.resume_text.as_str()),
            ("jd_text", request.job_description_text.as_str()),
        ],
    )
}

fn build_feedback_prompt(request: &FeedbackRequest) -> String {
    let missing_skills = request.missing_skills.join(", ");
    fill_template(
        FEEDBACK_PROMPT_TEMPLATE,
        &[
            ("jd_text", request.job_description.as_str()),
            ("resume_text", request.resume_text.as_str()),
            ("missing_skills", missing_skills.as_str()),
        ],
    )
}
