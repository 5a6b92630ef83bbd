//! Aggregate statistics over completed analyses: score histogram and verdict breakdown.

use serde::Serialize;

use crate::models::analysis::AnalysisResult;

/// Fixed histogram bins over `relevance_score`: (label, inclusive upper bound).
const SCORE_BINS: [(&str, f64); 4] = [
    ("0-25%", 25.0),
    ("26-50%", 50.0),
    ("51-75%", 75.0),
    ("76-100%", f64::INFINITY),
];

/// Verdicts counted by the breakdown. Anything else the scorer says is skipped.
const VERDICTS: [&str; 3] = ["High", "Medium", "Low"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBin {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerdictSlice {
    pub verdict: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub total_results: usize,
    pub score_distribution: Vec<ScoreBin>,
    /// High, Medium, Low in that order; zero-count verdicts omitted.
    pub verdict_breakdown: Vec<VerdictSlice>,
}

pub fn compute_analytics<'a>(
    results: impl IntoIterator<Item = &'a AnalysisResult>,
) -> AnalyticsReport {
    let mut bins = [0usize; SCORE_BINS.len()];
    let mut verdicts = [0usize; VERDICTS.len()];
    let mut total_results = 0;

    for result in results {
        total_results += 1;

        let bin = SCORE_BINS
            .iter()
            .position(|(_, upper)| result.relevance_score <= *upper)
            .unwrap_or(SCORE_BINS.len() - 1);
        bins[bin] += 1;

        if let Some(i) = VERDICTS.iter().position(|v| *v == result.verdict) {
            verdicts[i] += 1;
        }
    }

    AnalyticsReport {
        total_results,
        score_distribution: SCORE_BINS
            .iter()
            .zip(bins)
            .map(|((name, _), count)| ScoreBin {
                name: name.to_string(),
                count,
            })
            .collect(),
        verdict_breakdown: VERDICTS
            .iter()
            .zip(verdicts)
            .filter(|(_, count)| *count > 0)
            .map(|(verdict, count)| VerdictSlice {
                verdict: verdict.to_string(),
                count,
            })
            .collect(),
    }
}
