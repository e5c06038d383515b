//! Shared types used across the customer workspace.

pub mod types;

pub use types::EntityId;
