//! Domain layer for the customer workspace.
//!
//! This crate provides:
//! - Entity and AggregateRoot traits
//! - Person and Item entities
//! - Transaction value object
//! - Customer aggregate with its validating factory

pub mod aggregate;
pub mod customer;
pub mod entity;
pub mod error;
pub mod value_object;

pub use aggregate::{AggregateRoot, Entity};
pub use customer::Customer;
pub use entity::{Item, Person};
pub use error::CustomerError;
pub use value_object::Transaction;
