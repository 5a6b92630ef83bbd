//! Scripted analysis services for tests. Counts every call it receives.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::analysis::schema::{
    ExtractSkillsRequest, ExtractSkillsResponse, FeedbackRequest, FeedbackResponse,
    ScoreRelevanceRequest, ScoreRelevanceResponse,
};
use crate::analysis::services::{
    AnalysisServices, FeedbackGenerator, RelevanceScorer, ServiceError, SkillExtractor,
};
use crate::llm_client::LlmError;
use crate::models::job_description::{JobDescription, Location};

pub const JD_TEXT: &str = "Senior Python Developer. Build data pipelines with Python and SQL, \
    ship services in Docker containers, and partner with analytics teams.";

pub const RESUME_TEXT: &str = "Backend engineer with six years of Python experience, \
    running Kubernetes clusters and building REST APIs for fintech products.";

pub fn job_description(text: &str) -> JobDescription {
    JobDescription {
        id: Uuid::new_v4(),
        role: "Senior Python Developer".to_string(),
        location: Location::Bangalore,
        text: text.to_string(),
        created_at: Utc::now(),
    }
}

fn overloaded() -> ServiceError {
    ServiceError::Llm(LlmError::Api {
        status: 529,
        message: "Overloaded".to_string(),
    })
}

pub struct MockServices {
    pub jd_text: String,
    pub jd_skills: Vec<String>,
    pub resume_skills: Vec<String>,
    pub score: ScoreRelevanceResponse,
    pub suggestions: Vec<String>,
    pub fail_jd_extraction: bool,
    pub fail_resume_extraction: bool,
    pub fail_scoring: bool,
    pub fail_feedback: bool,
    pub extract_calls: AtomicUsize,
    pub score_calls: AtomicUsize,
    pub feedback_calls: AtomicUsize,
    pub feedback_requests: Mutex<Vec<FeedbackRequest>>,
}

impl MockServices {
    /// Extraction returns `jd_skills` for `JD_TEXT` and `resume_skills` for anything else.
    pub fn new(jd_skills: &[&str], resume_skills: &[&str]) -> Self {
        Self {
            jd_text: JD_TEXT.to_string(),
            jd_skills: jd_skills.iter().map(|s| s.to_string()).collect(),
            resume_skills: resume_skills.iter().map(|s| s.to_string()).collect(),
            score: ScoreRelevanceResponse {
                relevance_score: 68.0,
                hard_match_score: 55.0,
                semantic_match_score: 74.0,
                verdict: "Medium".to_string(),
            },
            suggestions: vec![
                "Add a project that uses SQL window functions.".to_string(),
                "Containerize an existing service with Docker.".to_string(),
            ],
            fail_jd_extraction: false,
            fail_resume_extraction: false,
            fail_scoring: false,
            fail_feedback: false,
            extract_calls: AtomicUsize::new(0),
            score_calls: AtomicUsize::new(0),
            feedback_calls: AtomicUsize::new(0),
            feedback_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn services(self: &Arc<Self>) -> AnalysisServices {
        AnalysisServices {
            skills: self.clone(),
            scorer: self.clone(),
            feedback: self.clone(),
        }
    }

    pub fn total_calls(&self) -> usize {
        self.extract_calls.load(Ordering::SeqCst)
            + self.score_calls.load(Ordering::SeqCst)
            + self.feedback_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SkillExtractor for MockServices {
    async fn extract_skills(
        &self,
        request: &ExtractSkillsRequest,
    ) -> Result<ExtractSkillsResponse, ServiceError> {
        self.extract_calls.fetch_add(1, Ordering::SeqCst);
        if request.text == self.jd_text {
            if self.fail_jd_extraction {
                return Err(overloaded());
            }
            return Ok(ExtractSkillsResponse {
                skills: self.jd_skills.clone(),
            });
        }
        if self.fail_resume_extraction {
            return Err(overloaded());
        }
        Ok(ExtractSkillsResponse {
            skills: self.resume_skills.clone(),
        })
    }
}

#[async_trait]
impl RelevanceScorer for MockServices {
    async fn score_relevance(
        &self,
        _request: &ScoreRelevanceRequest,
    ) -> Result<ScoreRelevanceResponse, ServiceError> {
        self.score_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_scoring {
            return Err(overloaded());
        }
        Ok(self.score.clone())
    }
}

#[async_trait]
impl FeedbackGenerator for MockServices {
    async fn generate_feedback(
        &self,
        request: &FeedbackRequest,
    ) -> Result<FeedbackResponse, ServiceError> {
        self.feedback_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.feedback_requests.lock() {
            requests.push(request.clone());
        }
        if self.fail_feedback {
            return Err(overloaded());
        }
        Ok(FeedbackResponse {
            suggestions: self.suggestions.clone(),
        })
    }
}
