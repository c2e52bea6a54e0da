//! Handlers for the current user's profile and avatar.

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use quriousity_core::avatar::AVATAR_CONTENT_TYPE;
use quriousity_core::profile::{ProfileUpdate, UserProfile};
use quriousity_db::models::course::CourseView;
use quriousity_db::repositories::{CourseRepo, UserRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::current_user::CurrentUser;
use crate::state::AppState;

/// Response body for a successful avatar upload.
#[derive(Debug, Serialize)]
pub struct AvatarUploaded {
    pub success: bool,
    pub avatar_url: String,
}

/// GET /api/users/profile
pub async fn get_profile(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<UserProfile>> {
    let profile = UserRepo::profile(&state.catalog, &user_id).await?;
    Ok(Json(profile))
}

/// PUT /api/users/profile
///
/// Returns the profile with `input` merged over it. The merge is not
/// stored, so the next GET shows the original values.
pub async fn update_profile(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Json(input): Json<ProfileUpdate>,
) -> AppResult<Json<UserProfile>> {
    let profile = UserRepo::merge_profile(&state.catalog, &user_id, input).await?;

    tracing::info!(%user_id, "Profile update merged (not persisted)");

    Ok(Json(profile))
}

/// GET /api/users/courses
///
/// Courses the current user is enrolled in.
pub async fn list_enrolled_courses(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CourseView>>> {
    Ok(Json(CourseRepo::list_enrolled(&state.catalog, &user_id).await))
}

/// GET /api/users/{id}/avatar
///
/// Serves the stored avatar, or the (possibly freshly created, empty)
/// default placeholder when the user never uploaded one.
pub async fn get_avatar(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let image = state.avatars.load(&user_id).await?;

    if image.is_default {
        tracing::debug!(%user_id, "No avatar uploaded, serving default");
    }

    Ok((
        [
            (header::CONTENT_TYPE, AVATAR_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        image.bytes,
    ))
}

/// POST /api/users/avatar
///
/// Accepts a multipart form with a required `file` field and stores its
/// bytes as the current user's avatar. Content is not inspected and the
/// route carries no body size limit.
pub async fn upload_avatar(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<AvatarUploaded>> {
    let mut file_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            file_data = Some(field.bytes().await?.to_vec());
        }
    }

    let data =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let avatar_url = state.avatars.save(&user_id, &data).await?;

    tracing::info!(%user_id, bytes = data.len(), "Avatar uploaded");

    Ok(Json(AvatarUploaded {
        success: true,
        avatar_url,
    }))
}
