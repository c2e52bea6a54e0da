pub mod assessments;
pub mod community;
pub mod courses;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users/profile                    get, update (merge, not persisted)
/// /users/courses                    enrolled courses
/// /users/avatar                     upload avatar (POST, multipart)
/// /users/{id}/avatar                avatar image
///
/// /courses                          list
/// /courses/{id}                     get
/// /courses/{id}/enroll              enroll current user (POST)
/// /courses/{id}/progress            enrollment progress
///
/// /assessments                      list
/// /assessments/{id}                 get
/// /assessments/{id}/submit          submit answers (POST)
///
/// /community/leaderboard            leaderboard
/// /community/discussions            list
/// /community/discussions/{id}       get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/courses", courses::router())
        .nest("/assessments", assessments::router())
        .nest("/community", community::router())
}
