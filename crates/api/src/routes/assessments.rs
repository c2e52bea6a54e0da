use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assessments;
use crate::state::AppState;

/// Assessment routes mounted at `/assessments`.
///
/// ```text
/// GET    /                 -> list_assessments
/// GET    /{id}             -> get_assessment
/// POST   /{id}/submit      -> submit_assessment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assessments::list_assessments))
        .route("/{id}", get(assessments::get_assessment))
        .route("/{id}/submit", post(assessments::submit_assessment))
}
