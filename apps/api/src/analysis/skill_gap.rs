//! Skill-gap computation between JD skills and resume skills.
//!
//! Comparison is case-insensitive. Missing skills come back lower-cased
//! (the comparison form), while the stored skill lists keep their casing.

use std::collections::HashSet;

/// JD skills with no case-insensitive match among the resume skills.
///
/// Output is lower-cased, de-duplicated and keeps the JD's first-seen order.
pub fn missing_skills(jd_skills: &[String], resume_skills: &[String]) -> Vec<String> {
    let resume: HashSet<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut seen = HashSet::new();
    jd_skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|s| seen.insert(s.clone()))
        .filter(|s| !resume.contains(s))
        .collect()
}

/// De-duplicates skills case-insensitively, keeping the first casing seen.
pub fn dedup_skills(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter(|s| seen.insert(s.to_lowercase()))
        .cloned()
        .collect()
}
