//! Course lookups with the per-user `isEnrolled` flag derived at read time.

use quriousity_core::enrollment::EnrollmentState;

use crate::models::course::CourseView;
use crate::store::{CatalogStore, EnrollmentMap};

/// Provides read access to the course catalog.
pub struct CourseRepo;

impl CourseRepo {
    /// All courses in catalog order, flagged for `user_id`.
    ///
    /// The enrollment set is read once, so every flag in the result reflects
    /// the same instant.
    pub async fn list(store: &CatalogStore, user_id: &str) -> Vec<CourseView> {
        let enrollments = store.enrollments.read().await;
        store
            .courses
            .iter()
            .map(|course| CourseView::new(course, state_of(&enrollments, user_id, &course.id)))
            .collect()
    }

    /// A single course flagged for `user_id`, or `None` if the id is unknown.
    pub async fn find_by_id(
        store: &CatalogStore,
        user_id: &str,
        course_id: &str,
    ) -> Option<CourseView> {
        let course = store.find_course(course_id)?;
        let enrollments = store.enrollments.read().await;
        Some(CourseView::new(
            course,
            state_of(&enrollments, user_id, course_id),
        ))
    }

    /// Courses `user_id` is enrolled in, in catalog order.
    pub async fn list_enrolled(store: &CatalogStore, user_id: &str) -> Vec<CourseView> {
        Self::list(store, user_id)
            .await
            .into_iter()
            .filter(|view| view.is_enrolled)
            .collect()
    }
}

fn state_of(enrollments: &EnrollmentMap, user_id: &str, course_id: &str) -> EnrollmentState {
    let exists = enrollments
        .get(user_id)
        .is_some_and(|courses| courses.contains_key(course_id));
    EnrollmentState::from_record_exists(exists)
}
