//! Aggregate root trait.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root owns a cluster of objects and is the only entry point for
/// changing them. Implementations validate every mutation before applying it,
/// so a failed call leaves the aggregate untouched.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Starts at 0 and grows by one for every accepted mutation.
    fn version(&self) -> u64;
}
