use quriousity_core::error::CoreError;
use quriousity_core::profile::{ProfileUpdate, UserProfile};

use crate::models::user::User;
use crate::store::CatalogStore;

/// Provides read access to users and their display profiles.
pub struct UserRepo;

impl UserRepo {
    pub async fn find_by_id(store: &CatalogStore, user_id: &str) -> Option<User> {
        store.find_user(user_id).cloned()
    }

    /// The enriched profile of `user_id`.
    pub async fn profile(store: &CatalogStore, user_id: &str) -> Result<UserProfile, CoreError> {
        store
            .find_user(user_id)
            .map(User::profile)
            .ok_or_else(|| CoreError::not_found("User", user_id))
    }

    /// Merge `update` over the profile of `user_id` and return the result.
    ///
    /// The merge is not stored: the next [`UserRepo::profile`] call returns
    /// the original values.
    pub async fn merge_profile(
        store: &CatalogStore,
        user_id: &str,
        update: ProfileUpdate,
    ) -> Result<UserProfile, CoreError> {
        let current = Self::profile(store, user_id).await?;
        Ok(current.merged_with(update))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn profile_is_enriched() {
        let store = CatalogStore::seeded().unwrap();
        let profile = UserRepo::profile(&store, "user1").await.unwrap();

        assert_eq!(profile.name, "Sripathi");
        assert_eq!(profile.skills.len(), 4);
        assert_eq!(profile.learning_focus.as_deref(), Some("Machine Learning"));
        assert_eq!(profile.avatar_url.as_deref(), Some("/api/users/user1/avatar"));
    }

    #[tokio::test]
    async fn merged_profile_is_not_persisted() {
        let store = CatalogStore::seeded().unwrap();
        let update = ProfileUpdate {
            name: Some("Someone Else".into()),
            ..Default::default()
        };

        let merged = UserRepo::merge_profile(&store, "user1", update).await.unwrap();
        assert_eq!(merged.name, "Someone Else");

        let reread = UserRepo::profile(&store, "user1").await.unwrap();
        assert_eq!(reread.name, "Sripathi");
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let store = CatalogStore::seeded().unwrap();
        assert_matches!(
            UserRepo::profile(&store, "ghost").await,
            Err(CoreError::NotFound { entity: "User", .. })
        );
        assert!(UserRepo::find_by_id(&store, "ghost").await.is_none());
    }
}
