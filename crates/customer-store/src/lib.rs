//! Customer repository contract and its in-memory implementation.

pub mod error;
pub mod memory;
pub mod store;

pub use common::EntityId;
pub use error::{RepositoryError, Result, StoreConflict};
pub use memory::InMemoryCustomerRepository;
pub use store::{CustomerRepository, CustomerRepositoryExt};
