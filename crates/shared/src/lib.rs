//! Shared kernel value objects (used by every bounded context).
//!
//! Everything here is an immutable value object: validated on construction,
//! compared by value, and cheap to clone.

pub mod address;
pub mod money;

pub use address::Address;
pub use money::{Currency, Money};
