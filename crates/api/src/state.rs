use std::sync::Arc;

use quriousity_db::{AvatarStore, CatalogStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory catalog of users, courses, enrollments and community data.
    pub catalog: Arc<CatalogStore>,
    /// Avatar image files.
    pub avatars: Arc<AvatarStore>,
    /// Server configuration (current user id, timeouts, CORS).
    pub config: Arc<ServerConfig>,
}
