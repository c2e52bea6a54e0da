//! Request extractors.
//!
//! - [`current_user::CurrentUser`] -- Resolves the user every request acts as.

pub mod current_user;
