use quriousity_core::avatar::avatar_url;
use quriousity_core::profile::{
    UserProfile, DEFAULT_BIO, DEFAULT_LEARNING_FOCUS, DEFAULT_SKILLS,
};
use quriousity_core::types::RecordId;
use serde::Serialize;

/// A platform user. Reference data; never mutated after seeding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar_url: Option<String>,
}

impl User {
    pub fn new(id: &str, name: &str, email: &str, role: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            avatar_url: Some(avatar_url(id)),
        }
    }

    /// The user enriched with the static bio, skills and learning focus.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            avatar_url: self.avatar_url.clone(),
            bio: Some(DEFAULT_BIO.to_string()),
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            learning_focus: Some(DEFAULT_LEARNING_FOCUS.to_string()),
        }
    }
}
