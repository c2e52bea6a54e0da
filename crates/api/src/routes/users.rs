use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Current-user routes mounted at `/users`.
///
/// ```text
/// GET    /profile          -> get_profile
/// PUT    /profile          -> update_profile
/// GET    /courses          -> list_enrolled_courses
/// POST   /avatar           -> upload_avatar (multipart, field `file`, no body limit)
/// GET    /{id}/avatar      -> get_avatar
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/courses", get(users::list_enrolled_courses))
        .route(
            "/avatar",
            post(users::upload_avatar).layer(DefaultBodyLimit::disable()),
        )
        .route("/{id}/avatar", get(users::get_avatar))
}
