use quriousity_core::enrollment::EnrollmentState;
use quriousity_core::types::RecordId;
use serde::Serialize;

/// A catalog course. Holds no per-user state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub course_type: String,
    pub level: String,
    pub duration: String,
    pub instructor: String,
    #[serde(rename = "instructorId")]
    pub instructor_id: RecordId,
    #[serde(rename = "enrolledCount")]
    pub enrolled_count: u64,
    pub rating: Option<f64>,
    pub thumbnail_url: Option<String>,
}

/// A course as rendered for one user, with the derived `isEnrolled` flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseView {
    #[serde(flatten)]
    pub course: Course,
    #[serde(rename = "isEnrolled")]
    pub is_enrolled: bool,
}

impl CourseView {
    pub fn new(course: &Course, state: EnrollmentState) -> Self {
        Self {
            course: course.clone(),
            is_enrolled: state.is_enrolled(),
        }
    }

    pub fn id(&self) -> &str {
        &self.course.id
    }
}
