//! Storage layer: the in-memory catalog and avatar files.

pub mod avatars;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use avatars::AvatarStore;
pub use error::StoreError;
pub use store::CatalogStore;

/// Build the catalog from the demo dataset.
pub fn create_catalog() -> Result<CatalogStore, StoreError> {
    let store = CatalogStore::seeded()?;
    tracing::info!(courses = store.course_count(), "Catalog seeded");
    Ok(store)
}

/// Cheap readiness probe: the catalog is usable when it holds courses.
pub fn health_check(store: &CatalogStore) -> Result<(), StoreError> {
    if store.course_count() == 0 {
        return Err(StoreError::Core(
            quriousity_core::error::CoreError::Internal("catalog has no courses".into()),
        ));
    }
    Ok(())
}
