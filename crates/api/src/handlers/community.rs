//! Handlers for the community feed (leaderboard and discussions).

use axum::extract::{Path, State};
use axum::Json;
use quriousity_core::error::CoreError;
use quriousity_db::models::community::{Discussion, LeaderboardEntry};
use quriousity_db::repositories::CommunityRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/community/leaderboard
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    Ok(Json(CommunityRepo::leaderboard(&state.catalog).await))
}

/// GET /api/community/discussions
pub async fn list_discussions(State(state): State<AppState>) -> AppResult<Json<Vec<Discussion>>> {
    Ok(Json(CommunityRepo::list_discussions(&state.catalog).await))
}

/// GET /api/community/discussions/{id}
pub async fn get_discussion(
    State(state): State<AppState>,
    Path(discussion_id): Path<String>,
) -> AppResult<Json<Discussion>> {
    let discussion = CommunityRepo::find_discussion(&state.catalog, &discussion_id)
        .await
        .ok_or_else(|| AppError::Core(CoreError::not_found("Discussion", &discussion_id)))?;
    Ok(Json(discussion))
}
