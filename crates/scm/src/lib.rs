//! Supply Chain Management domain module (suppliers).
//!
//! Pure domain logic: no IO, no HTTP, no storage.

pub mod supplier;

pub use supplier::{Supplier, SupplierId};
