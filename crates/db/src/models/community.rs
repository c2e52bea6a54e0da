//! Community feed records: leaderboard snapshot and discussions.

use quriousity_core::types::RecordId;
use serde::Serialize;

/// A per-user ranking snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "userId")]
    pub user_id: RecordId,
    pub name: String,
    pub role: String,
    pub points: u32,
    pub streak: u32,
    pub badge: Option<String>,
    /// Rank movement since the previous snapshot, e.g. `"+2"`, `"0"`, `"-1"`.
    pub change: String,
    #[serde(rename = "isOnline")]
    pub is_online: bool,
}

/// A discussion thread in the community feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discussion {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    #[serde(rename = "authorId")]
    pub author_id: RecordId,
    pub category: String,
    pub replies: u32,
    pub views: u32,
    /// Human-readable relative time, e.g. `"2 hours ago"`.
    pub time: String,
    pub solved: bool,
}
