use axum::routing::get;
use axum::Router;

use crate::handlers::community;
use crate::state::AppState;

/// Community routes mounted at `/community`.
///
/// ```text
/// GET    /leaderboard         -> get_leaderboard
/// GET    /discussions         -> list_discussions
/// GET    /discussions/{id}    -> get_discussion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(community::get_leaderboard))
        .route("/discussions", get(community::list_discussions))
        .route("/discussions/{id}", get(community::get_discussion))
}
