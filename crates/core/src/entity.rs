//! Entity trait: identity that outlives any particular field values.

/// Entity marker + minimal interface.
///
/// Stores key their records by `Entity::id`, so two entities with equal ids are
/// the same record as far as a store is concerned.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
