use quriousity_core::enrollment::{clamp_percent, INITIAL_PERCENT_COMPLETE};
use quriousity_core::types::{RecordId, Timestamp};
use serde::Serialize;

/// Enrollment record for one user in one course.
///
/// Existence of this record is what makes the user enrolled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseProgress {
    #[serde(rename = "courseId")]
    pub course_id: RecordId,
    #[serde(rename = "userId")]
    pub user_id: RecordId,
    pub completed_modules: Vec<String>,
    #[serde(rename = "percentComplete")]
    pub percent_complete: f64,
    #[serde(rename = "lastAccessed")]
    pub last_accessed: Timestamp,
}

impl CourseProgress {
    /// A fresh enrollment: no modules completed, 0%.
    pub fn started(course_id: &str, user_id: &str, at: Timestamp) -> Self {
        Self::with_progress(course_id, user_id, &[], INITIAL_PERCENT_COMPLETE, at)
    }

    /// An enrollment with existing progress.
    ///
    /// Completed modules are a set: duplicates are dropped, first
    /// occurrence wins. The percentage is clamped to `0..=100`.
    pub fn with_progress(
        course_id: &str,
        user_id: &str,
        completed_modules: &[&str],
        percent_complete: f64,
        last_accessed: Timestamp,
    ) -> Self {
        let mut modules: Vec<String> = Vec::with_capacity(completed_modules.len());
        for module in completed_modules {
            if !modules.iter().any(|m| m == module) {
                modules.push(module.to_string());
            }
        }

        Self {
            course_id: course_id.to_string(),
            user_id: user_id.to_string(),
            completed_modules: modules,
            percent_complete: clamp_percent(percent_complete),
            last_accessed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn started_has_no_progress() {
        let now = chrono::Utc::now();
        let progress = CourseProgress::started("course2", "user1", now);

        assert!(progress.completed_modules.is_empty());
        assert_eq!(progress.percent_complete, 0.0);
        assert_eq!(progress.last_accessed, now);
    }

    #[test]
    fn duplicate_modules_collapse() {
        let progress = CourseProgress::with_progress(
            "course1",
            "user1",
            &["module1", "module2", "module1"],
            20.0,
            chrono::Utc::now(),
        );
        assert_eq!(progress.completed_modules, vec!["module1", "module2"]);
    }

    #[test]
    fn serializes_with_frontend_keys() {
        let progress = CourseProgress::started("course2", "user1", chrono::Utc::now());
        let json = serde_json::to_value(&progress).unwrap();

        assert_eq!(json["courseId"], "course2");
        assert_eq!(json["userId"], "user1");
        assert_eq!(json["completed_modules"], serde_json::json!([]));
        assert_eq!(json["percentComplete"], 0.0);
        assert!(json["lastAccessed"].is_string());
    }
}
