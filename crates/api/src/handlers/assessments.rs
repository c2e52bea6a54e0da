//! Handlers for the `/assessments` resource.

use axum::extract::{Path, State};
use axum::Json;
use quriousity_core::assessment::{grade_submission, SubmissionResult};
use quriousity_core::error::CoreError;
use quriousity_db::models::assessment::Assessment;
use quriousity_db::repositories::AssessmentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/assessments
pub async fn list_assessments(State(state): State<AppState>) -> AppResult<Json<Vec<Assessment>>> {
    Ok(Json(AssessmentRepo::list(&state.catalog).await))
}

/// GET /api/assessments/{id}
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(assessment_id): Path<String>,
) -> AppResult<Json<Assessment>> {
    let assessment = AssessmentRepo::find_by_id(&state.catalog, &assessment_id)
        .await
        .ok_or_else(|| AppError::Core(CoreError::not_found("Assessment", &assessment_id)))?;
    Ok(Json(assessment))
}

/// POST /api/assessments/{id}/submit
///
/// Accepts any JSON answers payload and returns the fixed score. The
/// assessment id is not looked up.
pub async fn submit_assessment(
    Path(assessment_id): Path<String>,
    Json(answers): Json<serde_json::Value>,
) -> AppResult<Json<SubmissionResult>> {
    let result = grade_submission(&answers);

    tracing::info!(%assessment_id, score = result.score, "Assessment submitted");

    Ok(Json(result))
}
