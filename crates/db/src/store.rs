//! The in-memory catalog.
//!
//! Reference collections are immutable after construction and need no
//! locking. Enrollments are the only mutable state and live behind a single
//! `RwLock`, keyed by user id and then course id.

use std::collections::{HashMap, HashSet};

use quriousity_core::types::RecordId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::assessment::Assessment;
use crate::models::community::{Discussion, LeaderboardEntry};
use crate::models::course::Course;
use crate::models::progress::CourseProgress;
use crate::models::user::User;
use crate::seed::SeedData;

/// Enrollment records per user, per course.
pub(crate) type EnrollmentMap = HashMap<RecordId, HashMap<RecordId, CourseProgress>>;

/// Owned catalog of demo records plus the growing enrollment set.
///
/// Built once at startup and shared behind an `Arc`. Access goes through the
/// zero-sized repositories in [`crate::repositories`].
#[derive(Debug)]
pub struct CatalogStore {
    pub(crate) users: Vec<User>,
    pub(crate) courses: Vec<Course>,
    pub(crate) assessments: Vec<Assessment>,
    pub(crate) leaderboard: Vec<LeaderboardEntry>,
    pub(crate) discussions: Vec<Discussion>,
    pub(crate) enrollments: RwLock<EnrollmentMap>,
}

impl CatalogStore {
    /// Build a catalog from seed collections.
    ///
    /// Fails if ids repeat within a collection or if a seed enrollment names
    /// a user or course that is not in the catalog.
    pub fn new(seed: SeedData) -> Result<Self, StoreError> {
        ensure_unique("User", seed.users.iter().map(|u| u.id.as_str()))?;
        ensure_unique("Course", seed.courses.iter().map(|c| c.id.as_str()))?;
        ensure_unique("Assessment", seed.assessments.iter().map(|a| a.id.as_str()))?;
        ensure_unique("Discussion", seed.discussions.iter().map(|d| d.id.as_str()))?;

        let mut enrollments: EnrollmentMap = HashMap::new();
        for progress in seed.enrollments {
            if !seed.users.iter().any(|u| u.id == progress.user_id) {
                return Err(StoreError::DanglingReference {
                    entity: "user",
                    id: progress.user_id,
                });
            }
            if !seed.courses.iter().any(|c| c.id == progress.course_id) {
                return Err(StoreError::DanglingReference {
                    entity: "course",
                    id: progress.course_id,
                });
            }
            enrollments
                .entry(progress.user_id.clone())
                .or_default()
                .insert(progress.course_id.clone(), progress);
        }

        Ok(Self {
            users: seed.users,
            courses: seed.courses,
            assessments: seed.assessments,
            leaderboard: seed.leaderboard,
            discussions: seed.discussions,
            enrollments: RwLock::new(enrollments),
        })
    }

    /// Build the catalog from the demo dataset.
    pub fn seeded() -> Result<Self, StoreError> {
        Self::new(SeedData::demo(chrono::Utc::now()))
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub(crate) fn find_course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    pub(crate) fn find_user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }
}

fn ensure_unique<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn demo_seed_builds() {
        let store = CatalogStore::seeded().unwrap();
        assert_eq!(store.course_count(), 3);
        assert!(store.find_user("user1").is_some());
        assert!(store.find_course("course2").is_some());
        assert!(store.find_course("course9").is_none());
    }

    #[test]
    fn duplicate_course_ids_are_rejected() {
        let mut seed = SeedData::demo(chrono::Utc::now());
        let copy = seed.courses[0].clone();
        seed.courses.push(copy);

        assert_matches!(
            CatalogStore::new(seed),
            Err(StoreError::DuplicateId { entity: "Course", ref id }) if id == "course1"
        );
    }

    #[test]
    fn enrollment_for_unknown_course_is_rejected() {
        let mut seed = SeedData::demo(chrono::Utc::now());
        seed.enrollments.push(CourseProgress::started(
            "course404",
            "user1",
            chrono::Utc::now(),
        ));

        assert_matches!(
            CatalogStore::new(seed),
            Err(StoreError::DanglingReference { entity: "course", .. })
        );
    }
}
