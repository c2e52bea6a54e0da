//! Identity extractor.
//!
//! There is no authentication: every request acts as the user named by
//! `CURRENT_USER_ID`. Handlers receive the id through this extractor and
//! pass it explicitly into the repositories, so a real identity layer only
//! has to replace this file.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// The user a request is acting as.
///
/// ```ignore
/// async fn my_handler(CurrentUser(user_id): CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(%user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(state.config.current_user_id.clone()))
    }
}
