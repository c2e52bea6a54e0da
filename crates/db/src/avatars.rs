//! Avatar image files on the local filesystem.
//!
//! One directory holds `{user_id}.jpg` per uploading user plus a shared
//! `default.jpg`, which is created empty the first time it is needed. All
//! file access goes through one mutex, so a read never observes a partially
//! written upload and the placeholder is created at most once.

use std::path::{Path, PathBuf};

use quriousity_core::avatar::{avatar_file_name, avatar_url, is_safe_file_stem, DEFAULT_AVATAR_FILE};
use tokio::sync::Mutex;

use crate::error::StoreError;

/// Bytes of an avatar as served to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage {
    pub bytes: Vec<u8>,
    /// `true` when the user had no uploaded avatar and the placeholder was
    /// returned instead.
    pub is_default: bool,
}

/// File-backed avatar storage rooted at a single directory.
#[derive(Debug)]
pub struct AvatarStore {
    dir: PathBuf,
    io_lock: Mutex<()>,
}

impl AvatarStore {
    /// Open the store, creating the directory if it does not exist.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        tracing::debug!(dir = %dir.display(), "Avatar directory ready");
        Ok(Self {
            dir,
            io_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store `bytes` as the avatar of `user_id` and return its public URL.
    ///
    /// Any content is accepted, including an empty body.
    pub async fn save(&self, user_id: &str, bytes: &[u8]) -> Result<String, StoreError> {
        let path = self.dir.join(avatar_file_name(user_id)?);

        let _guard = self.io_lock.lock().await;
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(user_id, bytes = bytes.len(), path = %path.display(), "Avatar written");

        Ok(avatar_url(user_id))
    }

    /// Load the avatar of `user_id`, falling back to the placeholder.
    ///
    /// Ids that cannot name a file are treated as having no upload.
    pub async fn load(&self, user_id: &str) -> Result<AvatarImage, StoreError> {
        let _guard = self.io_lock.lock().await;

        if is_safe_file_stem(user_id) {
            let path = self.dir.join(avatar_file_name(user_id)?);
            if tokio::fs::try_exists(&path).await? {
                let bytes = tokio::fs::read(&path).await?;
                return Ok(AvatarImage {
                    bytes,
                    is_default: false,
                });
            }
        }

        let default_path = self.dir.join(DEFAULT_AVATAR_FILE);
        if !tokio::fs::try_exists(&default_path).await? {
            tokio::fs::write(&default_path, b"").await?;
            tracing::info!(path = %default_path.display(), "Created empty default avatar");
        }
        let bytes = tokio::fs::read(&default_path).await?;

        Ok(AvatarImage {
            bytes,
            is_default: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use quriousity_core::error::CoreError;

    use super::*;

    #[tokio::test]
    async fn open_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("media").join("avatars");

        let store = AvatarStore::open(&dir).await.unwrap();
        assert!(store.dir().is_dir());
    }

    #[tokio::test]
    async fn missing_avatar_falls_back_to_placeholder() {
        let tmp = tempfile::tempdir().unwrap();
        let store = AvatarStore::open(tmp.path()).await.unwrap();

        let first = store.load("user2").await.unwrap();
        assert!(first.is_default);
        assert!(first.bytes.is_empty());
        assert!(tmp.path().join("default.jpg").exists());

        let second = store.load("user2").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn existing_placeholder_is_not_overwritten() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("default.jpg"), b"generic").unwrap();
        let store = AvatarStore::open(tmp.path()).await.unwrap();

        let image = store.load("user2").await.unwrap();
        assert_eq!(image.bytes, b"generic");
    }

    #[tokio::test]
    async fn saved_avatar_is_served() {
        let tmp = tempfile::tempdir().unwrap();
        let store = AvatarStore::open(tmp.path()).await.unwrap();

        let url = store.save("user1", b"\xFF\xD8jpeg").await.unwrap();
        assert_eq!(url, "/api/users/user1/avatar");
        assert!(tmp.path().join("user1.jpg").exists());

        let image = store.load("user1").await.unwrap();
        assert!(!image.is_default);
        assert_eq!(image.bytes, b"\xFF\xD8jpeg");
    }

    #[tokio::test]
    async fn unsafe_ids_get_the_placeholder_and_cannot_upload() {
        let tmp = tempfile::tempdir().unwrap();
        let store = AvatarStore::open(tmp.path()).await.unwrap();

        let image = store.load("../secret").await.unwrap();
        assert!(image.is_default);

        assert_matches!(
            store.save("../secret", b"x").await,
            Err(StoreError::Core(CoreError::Validation(_)))
        );
    }
}
