use crate::types::{DbId, ExternalRefId};

/// Boxed error produced by a storage backend.
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed on '{field}': {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Duplicate: a favorite game with external reference {external_ref_id} already exists")]
    Duplicate { external_ref_id: ExternalRefId },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl CoreError {
    /// Shorthand for a [`CoreError::Validation`] on `field`.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Failure reported by a storage implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The uniqueness constraint on the external reference id rejected a write.
    #[error("External reference {0} is already taken")]
    ExternalRefTaken(ExternalRefId),

    /// The backend is unreachable or rejected the operation.
    #[error("Storage backend error: {0}")]
    Backend(#[source] BackendError),
}
