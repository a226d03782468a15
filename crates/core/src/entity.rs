//! Entities: objects whose identity outlives changes to their attributes.

/// An object identified by a key rather than by its attribute values.
///
/// Two entities are the same thing when their ids match, even if every other
/// field differs (a supplier that moved is still the same supplier). Derived
/// `PartialEq` on an entity compares full snapshots; use
/// [`Entity::same_identity_as`] to ask the identity question.
pub trait Entity {
    /// Key that identifies the entity for its whole lifetime.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
