use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job_description::Location;

/// One completed resume analysis against a job description snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub relevance_score: f64,     // 0 – 100
    pub hard_match_score: f64,    // 0 – 100
    pub semantic_match_score: f64, // 0 – 100
    /// "High" | "Medium" | "Low" as reported by the scorer; not a closed set.
    pub verdict: String,
    pub job_role: String,
    pub location: Location,
    pub resume_filename: String,
    /// JD skills exactly as extracted.
    pub jd_skills: Vec<String>,
    /// Resume skills, de-duplicated case-insensitively, first casing kept.
    pub resume_skills: Vec<String>,
    /// Lower-cased JD skills with no case-insensitive match in the resume.
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}
