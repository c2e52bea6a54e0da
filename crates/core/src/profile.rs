//! User profile view and the merge rule for profile updates.
//!
//! Profile updates are merged into the response only. The stored user record
//! is never written, so a subsequent read returns the original values.

use serde::{Deserialize, Serialize};

/// Static bio shown for the seeded demo user.
pub const DEFAULT_BIO: &str =
    "Data engineer passionate about building scalable data pipelines and learning ML.";

/// Static skill list shown for the seeded demo user.
pub const DEFAULT_SKILLS: &[&str] = &["Python", "SQL", "Data Engineering", "Spark"];

/// Static learning focus shown for the seeded demo user.
pub const DEFAULT_LEARNING_FOCUS: &str = "Machine Learning";

/// A user record enriched with display-only fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub learning_focus: Option<String>,
}

/// Partial profile payload for `PUT /api/users/profile`.
///
/// Every field is optional and unknown keys are ignored. `id` and
/// `avatar_url` are not accepted from clients. An explicit `null` is read
/// the same as an absent key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub learning_focus: Option<String>,
}

impl UserProfile {
    /// Merge `update` over this profile and return the resulting view.
    ///
    /// Identity fields (`name`, `email`, `role`) fall back to the current
    /// values when absent. Enrichment fields (`bio`, `skills`,
    /// `learning_focus`) fall back to empty values, matching how the
    /// frontend settings form submits a full replacement of those fields.
    pub fn merged_with(&self, update: ProfileUpdate) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: update.name.unwrap_or_else(|| self.name.clone()),
            email: update.email.unwrap_or_else(|| self.email.clone()),
            role: update.role.unwrap_or_else(|| self.role.clone()),
            avatar_url: self.avatar_url.clone(),
            bio: Some(update.bio.unwrap_or_default()),
            skills: update.skills.unwrap_or_default(),
            learning_focus: Some(update.learning_focus.unwrap_or_default()),
        }
    }
}
