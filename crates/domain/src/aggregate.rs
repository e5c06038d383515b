//! Core entity and aggregate traits.

use common::EntityId;

/// An object distinguished by its identity rather than its attributes.
pub trait Entity {
    /// Returns the entity's identifier.
    fn id(&self) -> EntityId;
}

/// Trait for aggregate roots.
///
/// An aggregate is a cluster of domain objects treated as a single unit.
/// All access to the cluster goes through the root, and the root's identity
/// is the identity of the whole cluster. Repositories store and load
/// aggregates by that identity.
pub trait AggregateRoot: Entity + Clone + Send + Sync {
    /// Returns the aggregate type name.
    ///
    /// Used to label log records and metrics.
    fn aggregate_type() -> &'static str;
}
