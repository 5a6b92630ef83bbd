// All LLM prompt templates for the Analysis module.
// Every template is sent with `llm_client::prompts::JSON_ONLY_SYSTEM`.

/// Skill extraction prompt template. Replace `{text}` before sending.
pub const EXTRACT_SKILLS_PROMPT_TEMPLATE: &str = r#"You are an expert in extracting skills from text.

Your task is to identify and standardize both hard and soft skills present in the provided text.
Use the canonical name of each skill ("PostgreSQL", not "postgres db"). List each skill once.

Return a JSON object with this EXACT schema:
{
  "skills": ["Python", "SQL", "Stakeholder Communication"]
}

TEXT:
{text}"#;

/// Relevance scoring prompt template. Replace `{resume_text}` and `{jd_text}`.
pub const SCORE_RELEVANCE_PROMPT_TEMPLATE: &str = r#"You are an expert in resume screening and candidate evaluation.

You are provided a resume and a job description. Score how well the resume matches the job description.

Return a JSON object with this EXACT schema:
{
  "relevanceScore": 72,
  "hardMatchScore": 65,
  "semanticMatchScore": 80,
  "verdict": "Medium"
}

Rules:
- relevanceScore: overall fit, 0-100
- hardMatchScore: coverage of concrete skills, tools and qualifications, 0-100
- semanticMatchScore: similarity of experience and responsibilities beyond exact keywords, 0-100
- verdict: exactly one of "High", "Medium", "Low"

RESUME:
{resume_text}

JOB DESCRIPTION:
{jd_text}"#;

/// Feedback prompt template.
/// Replace: {jd_text}, {resume_text}, {missing_skills}
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"You are a career coach providing feedback to job candidates.

Based on the job description and the candidate's resume, identify areas where the candidate can improve.
Provide actionable suggestions in short, digestible chunks of text.

Return a JSON object with this EXACT schema:
{
  "suggestions": ["Complete a hands-on Docker course and containerize one of the listed projects."]
}

JOB DESCRIPTION:
{jd_text}

RESUME:
{resume_text}

MISSING SKILLS: {missing_skills}"#;

/// Substitutes `{name}` placeholders in a single left-to-right pass.
/// Inserted values are never rescanned, so braces inside them are sent verbatim.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values.iter().find_map(|&(name, value)| {
            tail.strip_prefix(name)
                .and_then(|after| after.strip_prefix('}'))
                .map(|after| (value, after))
        });
        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
