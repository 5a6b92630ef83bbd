//! Request and response shapes of the three LLM-backed services.
//!
//! Model output is untrusted: every response passes through `validate()`
//! before the workflow reads it. Unknown fields (e.g. a `reasoning` string
//! from the scorer) are ignored; missing or mistyped fields already fail
//! deserialization in the LLM client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("{field} must be a finite number between 0 and 100, got {value}")]
    ScoreOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must not be blank")]
    Blank { field: &'static str },
}

/// Input of the skill extraction service.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
}

impl ExtractSkillsResponse {
    pub fn validate(self) -> Result<Self, SchemaError> {
        Ok(Self {
            skills: clean_entries(self.skills),
        })
    }
}

/// Input of the relevance scoring service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRelevanceRequest {
    pub resume_text: String,
    pub job_description_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRelevanceResponse {
    pub relevance_score: f64,
    pub hard_match_score: f64,
    pub semantic_match_score: f64,
    pub verdict: String,
}

impl ScoreRelevanceResponse {
    pub fn validate(self) -> Result<Self, SchemaError> {
        check_score("relevanceScore", self.relevance_score)?;
        check_score("hardMatchScore", self.hard_match_score)?;
        check_score("semanticMatchScore", self.semantic_match_score)?;

        let verdict = self.verdict.trim().to_string();
        if verdict.is_empty() {
            return Err(SchemaError::Blank { field: "verdict" });
        }

        Ok(Self { verdict, ..self })
    }
}

/// Input of the feedback generation service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub job_description: String,
    pub resume_text: String,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub suggestions: Vec<String>,
}

impl FeedbackResponse {
    pub fn validate(self) -> Result<Self, SchemaError> {
        Ok(Self {
            suggestions: clean_entries(self.suggestions),
        })
    }
}

fn check_score(field: &'static str, value: f64) -> Result<(), SchemaError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(SchemaError::ScoreOutOfRange { field, value })
    }
}

/// Trims each entry and drops the blank ones.
fn clean_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}
