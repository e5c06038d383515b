use thiserror::Error;

use crate::EntityId;

/// The reason a write was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreConflict {
    /// An entry already exists under this id.
    #[error("customer {0} already exists")]
    Duplicate(EntityId),

    /// No entry exists under this id.
    #[error("customer {0} does not exist")]
    Missing(EntityId),
}

/// Errors that can occur when interacting with a customer repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No customer is stored under the requested id.
    #[error("the customer was not found in the repository: {0}")]
    NotFound(EntityId),

    /// The customer could not be added.
    #[error("failed to add customer: {0}")]
    AddFailed(#[source] StoreConflict),

    /// The customer could not be updated.
    #[error("failed to update the customer: {0}")]
    UpdateFailed(#[source] StoreConflict),
}

impl RepositoryError {
    /// Returns true if this is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }

    /// Returns the underlying cause of a rejected write.
    pub fn conflict(&self) -> Option<&StoreConflict> {
        match self {
            RepositoryError::AddFailed(cause) | RepositoryError::UpdateFailed(cause) => Some(cause),
            RepositoryError::NotFound(_) => None,
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
