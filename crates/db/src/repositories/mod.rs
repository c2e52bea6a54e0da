//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async lookups that
//! accept `&CatalogStore` as the first argument. Operations whose result
//! depends on who is asking take the requesting user id explicitly.

pub mod assessment_repo;
pub mod community_repo;
pub mod course_repo;
pub mod enrollment_repo;
pub mod user_repo;

pub use assessment_repo::AssessmentRepo;
pub use community_repo::CommunityRepo;
pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use user_repo::UserRepo;
