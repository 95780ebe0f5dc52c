use crate::types::RecordId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: RecordId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] on `entity` with `id`.
    pub fn not_found(entity: &'static str, id: impl Into<RecordId>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}
