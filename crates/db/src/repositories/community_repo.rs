use crate::models::community::{Discussion, LeaderboardEntry};
use crate::store::CatalogStore;

/// Provides read access to the leaderboard and discussion feed.
pub struct CommunityRepo;

impl CommunityRepo {
    /// Leaderboard entries in snapshot order.
    pub async fn leaderboard(store: &CatalogStore) -> Vec<LeaderboardEntry> {
        store.leaderboard.clone()
    }

    pub async fn list_discussions(store: &CatalogStore) -> Vec<Discussion> {
        store.discussions.clone()
    }

    pub async fn find_discussion(store: &CatalogStore, discussion_id: &str) -> Option<Discussion> {
        store
            .discussions
            .iter()
            .find(|d| d.id == discussion_id)
            .cloned()
    }
}
