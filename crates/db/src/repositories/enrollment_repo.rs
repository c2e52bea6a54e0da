//! Enrollment writes and progress reads.

use quriousity_core::enrollment::{EnrollOutcome, EnrollmentState};
use quriousity_core::error::CoreError;

use crate::models::progress::CourseProgress;
use crate::store::CatalogStore;

/// Provides access to the enrollment set.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll `user_id` in `course_id`.
    ///
    /// Unknown courses fail with `NotFound`. Enrolling again is a no-op that
    /// leaves the existing record untouched.
    pub async fn enroll(
        store: &CatalogStore,
        user_id: &str,
        course_id: &str,
    ) -> Result<EnrollOutcome, CoreError> {
        if store.find_course(course_id).is_none() {
            return Err(CoreError::not_found("Course", course_id));
        }

        let mut enrollments = store.enrollments.write().await;
        let courses = enrollments.entry(user_id.to_string()).or_default();
        let state = EnrollmentState::from_record_exists(courses.contains_key(course_id));
        let outcome = EnrollOutcome::from_state(state);

        if outcome == EnrollOutcome::Created {
            courses.insert(
                course_id.to_string(),
                CourseProgress::started(course_id, user_id, chrono::Utc::now()),
            );
            tracing::debug!(user_id, course_id, "Enrollment record created");
        }

        Ok(outcome)
    }

    /// Progress of `user_id` in `course_id`; `NotFound` unless enrolled.
    pub async fn find_progress(
        store: &CatalogStore,
        user_id: &str,
        course_id: &str,
    ) -> Result<CourseProgress, CoreError> {
        store
            .enrollments
            .read()
            .await
            .get(user_id)
            .and_then(|courses| courses.get(course_id))
            .cloned()
            .ok_or_else(|| CoreError::not_found("Course progress", course_id))
    }

    /// Number of enrollment records held for `user_id`.
    #[cfg(test)]
    pub(crate) async fn count_for_user(store: &CatalogStore, user_id: &str) -> usize {
        store
            .enrollments
            .read()
            .await
            .get(user_id)
            .map_or(0, |courses| courses.len())
    }
}
