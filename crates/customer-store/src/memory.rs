use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use domain::Customer;
use tokio::sync::RwLock;

use crate::{EntityId, RepositoryError, Result, StoreConflict, store::CustomerRepository};

/// In-memory customer repository.
///
/// Customers live in a map owned by the repository and guarded by a single
/// reader/writer lock. Each write checks for an existing entry and mutates
/// the map while holding the same write guard, so concurrent `add` calls for
/// one id cannot both succeed. Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<EntityId, Customer>>>,
}

impl InMemoryCustomerRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored customers.
    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }

    /// Removes every stored customer.
    pub async fn clear(&self) {
        self.customers.write().await.clear();
    }
}

impl std::fmt::Debug for InMemoryCustomerRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCustomerRepository").finish_non_exhaustive()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: EntityId) -> Result<Customer> {
        let customers = self.customers.read().await;
        customers
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    async fn add(&self, customer: Customer) -> Result<()> {
        let id = customer.id();
        let mut customers = self.customers.write().await;

        match customers.entry(id) {
            Entry::Occupied(_) => {
                metrics::counter!("customer_repository_conflicts_total", "operation" => "add")
                    .increment(1);
                tracing::warn!("customer already exists");
                Err(RepositoryError::AddFailed(StoreConflict::Duplicate(id)))
            }
            Entry::Vacant(entry) => {
                entry.insert(customer);
                metrics::counter!("customer_repository_writes_total", "operation" => "add")
                    .increment(1);
                tracing::debug!("customer added");
                Ok(())
            }
        }
    }

    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    async fn update(&self, customer: Customer) -> Result<()> {
        let id = customer.id();
        let mut customers = self.customers.write().await;

        let Some(stored) = customers.get_mut(&id) else {
            metrics::counter!("customer_repository_conflicts_total", "operation" => "update")
                .increment(1);
            tracing::warn!("customer does not exist");
            return Err(RepositoryError::UpdateFailed(StoreConflict::Missing(id)));
        };

        *stored = customer;
        metrics::counter!("customer_repository_writes_total", "operation" => "update")
            .increment(1);
        tracing::debug!("customer updated");
        Ok(())
    }
}
