//! Procurement domain module (purchase orders).
//!
//! This crate contains business rules for purchase orders, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod order;
pub mod product;

pub use order::{PurchaseOrder, PurchaseOrderItem};
pub use product::ProductId;
