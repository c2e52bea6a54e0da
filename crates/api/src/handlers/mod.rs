pub mod assessments;
pub mod community;
pub mod courses;
pub mod users;
