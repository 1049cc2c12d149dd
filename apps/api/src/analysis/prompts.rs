// All LLM prompt constants for the Analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System instruction for candidate analysis.
pub fn analysis_system() -> String {
    format!(
        "You are an analytical AI hiring assistant that screens candidates against a \
        target job description. {JSON_ONLY_SYSTEM}"
    )
}

/// Candidate analysis prompt template.
/// Replace: {resume_text}, {experience_years}, {job_description}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Screen the following candidate against the target job description.

Input Data:
- Candidate Resume Text: "{resume_text}" (truncated if too long)
- Years of Experience: {experience_years}
- Target Job Description: "{job_description}" (truncated if too long)

Perform the following analysis and return ONLY valid JSON matching the schema:

1. Classification: Categorize the resume into a job role and determine seniority.
2. Skill Extraction: Extract key technical, soft, and domain skills with relevance scores (0-100).
3. Shortlisting: Predict a match score (0-100), a status (Shortlisted, Waitlisted or Rejected), the reasoning, and the pros and cons of the candidate.
4. Cultural Fit: Estimate a cultural fit score (0-100) based on the tone of the resume, with a short analysis.
5. Career Recommendation: Based purely on the resume details (ignoring the target job description), name the single best matching job profile this candidate should apply for (e.g. "Senior DevOps Engineer" or "Product Manager").
6. Optimization: Identify missing high-value keywords relative to the target job description. List the specific keywords the candidate must add to their resume to improve their match score to at least 80."#;

/// Fills the analysis template. Inputs are expected to be truncated already.
pub fn build_analysis_prompt(resume_text: &str, experience_years: u32, job_description: &str) -> String {
    let years = experience_years.to_string();
    fill_template(
        ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("{resume_text}", resume_text),
            ("{experience_years}", years.as_str()),
            ("{job_description}", job_description),
        ],
    )
}

/// Single left-to-right pass over `template`. Substituted values are never
/// rescanned, so placeholder-like text inside inputs is kept verbatim.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(key, _)| tail.starts_with(*key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
