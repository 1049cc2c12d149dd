//! Candidate analysis: one structured completion per call.
//!
//! Flow: truncate inputs → build prompt + schema → backend.complete →
//!       strip fences → parse `AnalysisResult` → range audit (log only).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::models::AnalysisResult;
use crate::analysis::prompts::{analysis_system, build_analysis_prompt};
use crate::analysis::schema::response_schema;
use crate::llm_client::{strip_json_fences, CompletionBackend, CompletionRequest, LlmError};

/// Hard caps applied before transmission, counted in characters.
pub const MAX_RESUME_CHARS: usize = 5000;
pub const MAX_JOB_DESCRIPTION_CHARS: usize = 2000;

/// Low temperature for consistent, analytical results.
pub const ANALYSIS_TEMPERATURE: f32 = 0.2;

/// What end users see for any service or parse failure.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to process candidate data. Please check your inputs and try again.";

/// Inputs to one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInput {
    pub resume_text: String,
    pub experience_years: u32,
    pub job_description: String,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Credential missing; raised before any network attempt.
    #[error("{0}")]
    Configuration(String),

    #[error("completion service error: {0}")]
    Service(LlmError),

    #[error("response did not match the analysis schema: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<LlmError> for AnalysisError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingCredential { .. } => AnalysisError::Configuration(err.to_string()),
            other => AnalysisError::Service(other),
        }
    }
}

impl AnalysisError {
    /// Human-readable message for the presentation layer. Service and parse
    /// failures collapse into one generic message; detail goes to the logs.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Configuration(msg) => msg.clone(),
            AnalysisError::Service(_) | AnalysisError::Parse(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

/// Returns the first `max` characters of `text`, never splitting a char.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Builds the single completion request for a candidate.
pub fn build_request(input: &CandidateInput) -> CompletionRequest {
    let resume = truncate_chars(&input.resume_text, MAX_RESUME_CHARS);
    let job_description = truncate_chars(&input.job_description, MAX_JOB_DESCRIPTION_CHARS);

    CompletionRequest {
        prompt: build_analysis_prompt(resume, input.experience_years, job_description),
        system: analysis_system(),
        response_schema: response_schema(),
        temperature: ANALYSIS_TEMPERATURE,
    }
}

/// Analyzes a candidate against a job description.
///
/// Issues exactly one request. The result is the parsed response passed
/// through unchanged; out-of-range scores are logged, not rejected.
pub async fn analyze_candidate(
    backend: &dyn CompletionBackend,
    input: &CandidateInput,
) -> Result<AnalysisResult, AnalysisError> {
    let request = build_request(input);

    info!(
        "Requesting candidate analysis: resume_chars={}, jd_chars={}, experience_years={}",
        input.resume_text.chars().count(),
        input.job_description.chars().count(),
        input.experience_years
    );

    let text = backend.complete(&request).await?;

    let body = strip_json_fences(&text);
    if body.is_empty() {
        return Err(AnalysisError::Service(LlmError::EmptyContent));
    }

    let result: AnalysisResult = serde_json::from_str(body)?;

    for issue in out_of_range_scores(&result) {
        warn!("Analysis for '{}': {issue}", result.candidate_name);
    }

    info!(
        "Candidate analysis complete: status={}, score={}",
        result.shortlist.status, result.shortlist.score
    );

    Ok(result)
}

/// Lists every score outside 0–100 (or non-finite) in the result.
pub fn out_of_range_scores(result: &AnalysisResult) -> Vec<String> {
    let mut issues = Vec::new();
    let mut check = |label: String, value: f64| {
        if !(0.0..=100.0).contains(&value) {
            issues.push(format!("{label} = {value} is outside 0-100"));
        }
    };

    check("classification.confidence".to_string(), result.classification.confidence);
    check("shortlist.score".to_string(), result.shortlist.score);
    check("culturalFit.score".to_string(), result.cultural_fit.score);
    for skill in &result.skills {
        check(format!("skills[{}].relevance", skill.name), skill.relevance);
    }

    issues
}
