//! Service error types.

use customer_store::RepositoryError;
use domain::CustomerError;
use thiserror::Error;

/// Errors that can occur during service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The customer could not be built.
    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    /// The repository rejected the operation.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
