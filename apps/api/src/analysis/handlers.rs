//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::analyzer::{analyze_candidate, CandidateInput};
use crate::analysis::demo::demo_input;
use crate::analysis::models::AnalysisResult;
use crate::dashboard::DashboardView;
use crate::errors::AppError;
use crate::screen::{lock, InFlight, ScreenState};
use crate::state::AppState;

/// Upper bound of the experience input. Enforced here, not in the analyzer.
pub const MAX_EXPERIENCE_YEARS: u32 = 50;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub result: AnalysisResult,
    pub dashboard: DashboardView,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Runs one candidate analysis and returns the result with its dashboard view.
/// Refused with 409 while another analysis is in flight.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<CandidateInput>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    validate_input(&request)?;

    let in_flight = InFlight::start(&state.screen)?;

    match analyze_candidate(state.llm.as_ref(), &request).await {
        Ok(result) => {
            let dashboard = DashboardView::from_result(&result);
            in_flight.complete(Ok((result.clone(), dashboard.clone())));
            Ok(Json(AnalyzeResponse {
                analysis_id: Uuid::new_v4(),
                analyzed_at: Utc::now(),
                result,
                dashboard,
            }))
        }
        Err(e) => {
            in_flight.complete(Err(e.user_message()));
            Err(e.into())
        }
    }
}

/// GET /api/v1/screen
///
/// Current screen state: idle, loading, success (with dashboard) or error.
pub async fn handle_screen(State(state): State<AppState>) -> Json<ScreenState> {
    Json(lock(&state.screen).state().clone())
}

/// GET /api/v1/demo
pub async fn handle_demo() -> Json<CandidateInput> {
    Json(demo_input())
}

fn validate_input(request: &CandidateInput) -> Result<(), AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resumeText cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }
    if request.experience_years > MAX_EXPERIENCE_YEARS {
        return Err(AppError::Validation(format!(
            "experienceYears must be between 0 and {MAX_EXPERIENCE_YEARS}"
        )));
    }
    Ok(())
}
