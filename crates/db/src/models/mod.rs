//! Catalog record structs.
//!
//! Each submodule contains the `Serialize` record as rendered to the
//! frontend. Field names follow the frontend contract, which mixes
//! camelCase and snake_case keys.

pub mod assessment;
pub mod community;
pub mod course;
pub mod progress;
pub mod user;
