//! Entities referenced by the customer aggregate.

use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::aggregate::Entity;

/// A person. The root entity of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: EntityId,
    pub name: String,
    pub age: u32,
}

impl Person {
    /// Creates a person with a fresh identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            age: 0,
        }
    }

    /// Sets the person's age.
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }
}

impl Entity for Person {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// A catalog item.
///
/// Items have their own lifecycle; customers only hold shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

impl Item {
    /// Creates an item with a fresh identity.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Entity for Item {
    fn id(&self) -> EntityId {
        self.id
    }
}
