//! Avatar file naming.
//!
//! Avatars are stored as `{user_id}.jpg` in a single directory, with a shared
//! `default.jpg` placeholder for users who never uploaded one.

use crate::error::CoreError;

/// File served when a user has no uploaded avatar.
pub const DEFAULT_AVATAR_FILE: &str = "default.jpg";

/// Extension appended to every stored avatar.
pub const AVATAR_EXTENSION: &str = "jpg";

/// Content type reported for avatar responses.
pub const AVATAR_CONTENT_TYPE: &str = "image/jpeg";

/// Public URL under which a user's avatar is served.
pub fn avatar_url(user_id: &str) -> String {
    format!("/api/users/{user_id}/avatar")
}

/// Whether `user_id` can be used verbatim as a file stem.
///
/// Only ASCII alphanumerics, `_` and `-` are allowed, which rules out
/// separators, `..` and hidden files.
pub fn is_safe_file_stem(user_id: &str) -> bool {
    !user_id.is_empty()
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// File name of the avatar stored for `user_id`.
pub fn avatar_file_name(user_id: &str) -> Result<String, CoreError> {
    if !is_safe_file_stem(user_id) {
        return Err(CoreError::Validation(format!(
            "User id '{user_id}' cannot be used as an avatar file name"
        )));
    }
    Ok(format!("{user_id}.{AVATAR_EXTENSION}"))
}
