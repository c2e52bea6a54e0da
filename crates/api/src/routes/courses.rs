use axum::routing::{get, post};
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Course routes mounted at `/courses`.
///
/// ```text
/// GET    /                 -> list_courses
/// GET    /{id}             -> get_course
/// POST   /{id}/enroll      -> enroll
/// GET    /{id}/progress    -> get_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list_courses))
        .route("/{id}", get(courses::get_course))
        .route("/{id}/enroll", post(courses::enroll))
        .route("/{id}/progress", get(courses::get_progress))
}
