//! Application services for the customer workspace.
//!
//! Services receive their collaborators through explicit configuration
//! structs rather than global state.

pub mod error;
pub mod order;

pub use error::ServiceError;
pub use order::{OrderService, OrderServiceConfig};
