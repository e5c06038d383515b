//! Order service wired to a customer repository.

use common::EntityId;
use customer_store::{CustomerRepository, InMemoryCustomerRepository};
use domain::Customer;

use crate::error::ServiceError;

/// Configuration for an [`OrderService`].
#[derive(Debug, Clone)]
pub struct OrderServiceConfig<R> {
    /// Repository holding the customers the service works with.
    pub customers: R,
}

impl<R: CustomerRepository> OrderServiceConfig<R> {
    pub fn new(customers: R) -> Self {
        Self { customers }
    }
}

impl OrderServiceConfig<InMemoryCustomerRepository> {
    /// Creates a configuration backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(InMemoryCustomerRepository::new())
    }
}

/// Service for order operations.
///
/// Holds the customer repository it was configured with.
pub struct OrderService<R: CustomerRepository> {
    customers: R,
}

impl<R: CustomerRepository> OrderService<R> {
    /// Creates a new order service from its configuration.
    pub fn new(config: OrderServiceConfig<R>) -> Self {
        Self {
            customers: config.customers,
        }
    }

    /// Returns a reference to the customer repository.
    pub fn customers(&self) -> &R {
        &self.customers
    }

    /// Creates a customer and stores it.
    #[tracing::instrument(skip(self))]
    pub async fn register_customer(&self, name: &str) -> Result<Customer, ServiceError> {
        let customer = Customer::new(name)?;
        self.customers.add(customer.clone()).await?;

        tracing::info!(customer_id = %customer.id(), "customer registered");
        Ok(customer)
    }

    /// Loads a stored customer.
    #[tracing::instrument(skip(self))]
    pub async fn customer(&self, id: EntityId) -> Result<Customer, ServiceError> {
        Ok(self.customers.get(id).await?)
    }
}
