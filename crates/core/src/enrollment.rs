//! Enrollment state model.
//!
//! A user is either enrolled in a course or not. The only transition is
//! `NotEnrolled -> Enrolled` on enroll; there is no unenroll.

use serde::Serialize;

/// Message returned by a successful (or repeated) enroll call.
pub const ENROLL_SUCCESS_MESSAGE: &str = "Successfully enrolled in the course";

/// Percent complete recorded for a fresh enrollment.
pub const INITIAL_PERCENT_COMPLETE: f64 = 0.0;

/// Upper bound of `percentComplete`.
pub const MAX_PERCENT_COMPLETE: f64 = 100.0;

/// Enrollment state of one user for one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentState {
    NotEnrolled,
    Enrolled,
}

impl EnrollmentState {
    /// Derive the state from whether an enrollment record exists.
    pub fn from_record_exists(exists: bool) -> Self {
        if exists {
            Self::Enrolled
        } else {
            Self::NotEnrolled
        }
    }

    pub fn is_enrolled(self) -> bool {
        self == Self::Enrolled
    }
}

/// What an enroll call did to the enrollment set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    /// A new enrollment record was created.
    Created,
    /// The user was already enrolled; nothing changed.
    AlreadyEnrolled,
}

impl EnrollOutcome {
    /// Outcome of enrolling from `state`.
    pub fn from_state(state: EnrollmentState) -> Self {
        match state {
            EnrollmentState::NotEnrolled => Self::Created,
            EnrollmentState::Enrolled => Self::AlreadyEnrolled,
        }
    }
}

/// Response body for `POST /api/courses/{id}/enroll`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrollAck {
    pub success: bool,
    pub message: String,
}

impl EnrollAck {
    pub fn enrolled() -> Self {
        Self {
            success: true,
            message: ENROLL_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Clamp a percentage into `0..=100`. NaN becomes 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return INITIAL_PERCENT_COMPLETE;
    }
    value.clamp(INITIAL_PERCENT_COMPLETE, MAX_PERCENT_COMPLETE)
}
