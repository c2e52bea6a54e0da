//! Handlers for the `/courses` resource.
//!
//! `isEnrolled` on every returned course is derived for the current user at
//! request time.

use axum::extract::{Path, State};
use axum::Json;
use quriousity_core::enrollment::{EnrollAck, EnrollOutcome};
use quriousity_core::error::CoreError;
use quriousity_db::models::course::CourseView;
use quriousity_db::models::progress::CourseProgress;
use quriousity_db::repositories::{CourseRepo, EnrollmentRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::current_user::CurrentUser;
use crate::state::AppState;

/// GET /api/courses
pub async fn list_courses(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CourseView>>> {
    Ok(Json(CourseRepo::list(&state.catalog, &user_id).await))
}

/// GET /api/courses/{id}
pub async fn get_course(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> AppResult<Json<CourseView>> {
    let course = CourseRepo::find_by_id(&state.catalog, &user_id, &course_id)
        .await
        .ok_or_else(|| AppError::Core(CoreError::not_found("Course", &course_id)))?;
    Ok(Json(course))
}

/// POST /api/courses/{id}/enroll
///
/// Idempotent: enrolling in a course the user is already enrolled in
/// succeeds without changing anything.
pub async fn enroll(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> AppResult<Json<EnrollAck>> {
    let outcome = EnrollmentRepo::enroll(&state.catalog, &user_id, &course_id).await?;

    match outcome {
        EnrollOutcome::Created => {
            tracing::info!(%user_id, %course_id, "User enrolled in course");
        }
        EnrollOutcome::AlreadyEnrolled => {
            tracing::debug!(%user_id, %course_id, "User already enrolled, nothing to do");
        }
    }

    Ok(Json(EnrollAck::enrolled()))
}

/// GET /api/courses/{id}/progress
///
/// Returns 404 unless the current user is enrolled in the course.
pub async fn get_progress(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> AppResult<Json<CourseProgress>> {
    let progress = EnrollmentRepo::find_progress(&state.catalog, &user_id, &course_id).await?;
    Ok(Json(progress))
}
