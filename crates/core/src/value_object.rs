//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Money`, `Address`, identifiers)
/// - **Entity**: has identity (`Supplier`, identified by its `SupplierId`)
///
/// The trait requires `Eq + Hash` on top of `Clone` so that every value object
/// can be used as a map key with structural semantics.
pub trait ValueObject: Clone + PartialEq + Eq + core::hash::Hash + core::fmt::Debug {}
