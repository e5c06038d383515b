//! Domain error types.

use thiserror::Error;

/// Errors that can occur while building a customer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    /// The customer was given an empty name.
    #[error("a customer has to have a valid name")]
    InvalidPerson,
}
