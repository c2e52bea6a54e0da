//! Domain types and pure rules shared by the Quriousity storage and API crates.

pub mod assessment;
pub mod avatar;
pub mod enrollment;
pub mod error;
pub mod profile;
pub mod types;
