//! In-memory dashboard session: uploaded job descriptions and completed analyses.
//!
//! Both lists are most-recent-first and live for the lifetime of the process.
//! `AppState` wraps the session in an `RwLock`; nothing here is async.

use std::collections::{HashSet, VecDeque};

use chrono::Utc;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::dashboard::analytics::{compute_analytics, AnalyticsReport};
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::models::job_description::{JobDescription, NewJobDescription};

pub const MIN_ROLE_CHARS: usize = 2;
pub const MIN_JD_CHARS: usize = 50;

/// Location value the dashboard sends for "All Locations".
const ALL_LOCATIONS: &str = "all";

/// Result list filters. Absent or empty fields do not filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultFilter {
    pub location: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_score: Option<f64>,
}

/// The dashboard sends `min_score=` while the score box is empty.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl ResultFilter {
    fn matches(&self, result: &AnalysisResult) -> bool {
        let location_match = match self.location.as_deref().map(str::trim) {
            None | Some("") | Some(ALL_LOCATIONS) => true,
            Some(location) => result.location.as_str() == location,
        };
        let score_match = self
            .min_score
            .map(|min| result.relevance_score >= min)
            .unwrap_or(true);
        location_match && score_match
    }
}

#[derive(Debug, Default)]
pub struct Dashboard {
    job_descriptions: VecDeque<JobDescription>,
    results: VecDeque<AnalysisResult>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores an uploaded job description.
    pub fn add_job_description(
        &mut self,
        upload: NewJobDescription,
    ) -> Result<JobDescription, AppError> {
        validate_upload(&upload)?;

        let jd = JobDescription {
            id: Uuid::new_v4(),
            role: upload.role.trim().to_string(),
            location: upload.location,
            text: upload.text,
            created_at: Utc::now(),
        };
        self.job_descriptions.push_front(jd.clone());
        Ok(jd)
    }

    pub fn job_descriptions(&self) -> Vec<JobDescription> {
        self.job_descriptions.iter().cloned().collect()
    }

    pub fn job_description(&self, id: Uuid) -> Option<&JobDescription> {
        self.job_descriptions.iter().find(|jd| jd.id == id)
    }

    pub fn record_result(&mut self, result: AnalysisResult) {
        self.results.push_front(result);
    }

    pub fn results(&self, filter: &ResultFilter) -> Vec<AnalysisResult> {
        self.results
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    /// Distinct result locations in first-seen order (newest result first).
    pub fn result_locations(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.results
            .iter()
            .map(|r| r.location.as_str())
            .filter(|loc| seen.insert(*loc))
            .map(str::to_string)
            .collect()
    }

    pub fn analytics(&self) -> AnalyticsReport {
        compute_analytics(self.results.iter())
    }
}

fn validate_upload(upload: &NewJobDescription) -> Result<(), AppError> {
    let mut messages = Vec::new();

    if upload.role.trim().chars().count() < MIN_ROLE_CHARS {
        messages.push(format!(
            "Job role must be at least {MIN_ROLE_CHARS} characters."
        ));
    }
    if upload.location.is_blank() {
        messages.push("Please select a location.".to_string());
    }
    if upload.text.chars().count() < MIN_JD_CHARS {
        messages.push(format!(
            "Job description must be at least {MIN_JD_CHARS} characters."
        ));
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(messages.join(", ")))
    }
}
