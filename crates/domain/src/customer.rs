//! Customer aggregate.

use std::sync::Arc;

use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateRoot, Entity};
use crate::entity::{Item, Person};
use crate::error::CustomerError;
use crate::value_object::Transaction;

/// Customer aggregate root.
///
/// The owned [`Person`] is the root entity: its id is the customer's id.
/// Items are shared with the catalog, transactions are owned values.
///
/// Customers are built through [`Customer::new`], which guarantees a
/// non-empty name. [`Customer::restore`] and [`Customer::restore_name`]
/// skip that check and exist for rehydrating stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    person: Person,
    products: Vec<Arc<Item>>,
    transactions: Vec<Transaction>,
}

impl Customer {
    /// Creates a customer with a fresh identity.
    ///
    /// Fails with [`CustomerError::InvalidPerson`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, CustomerError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CustomerError::InvalidPerson);
        }

        let person = Person::new(name);
        tracing::debug!(customer_id = %person.id, "customer created");

        Ok(Self {
            person,
            products: Vec::new(),
            transactions: Vec::new(),
        })
    }

    /// Rebuilds a customer from stored parts without validation.
    pub fn restore(
        person: Person,
        products: Vec<Arc<Item>>,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            person,
            products,
            transactions,
        }
    }

    /// Returns the customer's id.
    pub fn id(&self) -> EntityId {
        self.person.id
    }

    /// Reassigns the customer's id.
    ///
    /// This is an administrative operation for loading stored state, not a
    /// domain mutation.
    pub fn set_id(&mut self, id: EntityId) {
        self.person.id = id;
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    /// Overwrites the name without validation.
    ///
    /// Unlike [`Customer::new`], an empty name is accepted here.
    pub fn restore_name(&mut self, name: impl Into<String>) {
        self.person.name = name.into();
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn items(&self) -> &[Arc<Item>] {
        &self.products
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn add_item(&mut self, item: Arc<Item>) {
        self.products.push(item);
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}

impl Entity for Customer {
    fn id(&self) -> EntityId {
        self.person.id
    }
}

impl AggregateRoot for Customer {
    fn aggregate_type() -> &'static str {
        "Customer"
    }
}
