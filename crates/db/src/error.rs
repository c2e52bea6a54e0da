use quriousity_core::error::CoreError;

/// Errors raised while building the catalog or touching avatar files.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Two seed records of the same kind share an id.
    #[error("Duplicate {entity} id in seed data: {id}")]
    DuplicateId { entity: &'static str, id: String },

    /// A seed enrollment points at a user or course that does not exist.
    #[error("Seed enrollment references unknown {entity} '{id}'")]
    DanglingReference { entity: &'static str, id: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Avatar storage error: {0}")]
    Io(#[from] std::io::Error),
}
