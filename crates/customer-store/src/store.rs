use std::sync::Arc;

use async_trait::async_trait;
use domain::Customer;

use crate::{EntityId, RepositoryError, Result};

/// Core trait for customer repository implementations.
///
/// A repository stores customer aggregates keyed by their id, holding at
/// most one entry per id. All implementations must be thread-safe
/// (Send + Sync).
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Retrieves the customer stored under `id`.
    ///
    /// The returned value is a copy: changes to it are not visible to the
    /// repository until passed to `update`.
    /// Fails with `NotFound` if nothing is stored under `id`.
    async fn get(&self, id: EntityId) -> Result<Customer>;

    /// Stores a new customer.
    ///
    /// Fails with `AddFailed` if an entry already exists under the
    /// customer's id. Either the entry is inserted or nothing changes.
    async fn add(&self, customer: Customer) -> Result<()>;

    /// Replaces a stored customer.
    ///
    /// Fails with `UpdateFailed` if nothing is stored under the customer's
    /// id. The stored value is overwritten in full.
    async fn update(&self, customer: Customer) -> Result<()>;
}

#[async_trait]
impl<T: CustomerRepository + ?Sized> CustomerRepository for Arc<T> {
    async fn get(&self, id: EntityId) -> Result<Customer> {
        (**self).get(id).await
    }

    async fn add(&self, customer: Customer) -> Result<()> {
        (**self).add(customer).await
    }

    async fn update(&self, customer: Customer) -> Result<()> {
        (**self).update(customer).await
    }
}

/// Extension trait providing convenience methods for repositories.
#[async_trait]
pub trait CustomerRepositoryExt: CustomerRepository {
    /// Checks if a customer is stored under `id`.
    async fn contains(&self, id: EntityId) -> Result<bool> {
        match self.get(id).await {
            Ok(_) => Ok(true),
            Err(RepositoryError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

// Blanket implementation for all CustomerRepository implementations
impl<T: CustomerRepository + ?Sized> CustomerRepositoryExt for T {}
