//! Walkthrough of the procurement model: register a supplier, raise a
//! purchase order against it, add lines and total the order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use acme_core::DomainResult;
use acme_procurement::{ProductId, PurchaseOrder};
use acme_scm::{Supplier, SupplierId};
use acme_shared::{Address, Money};

pub const ORDER_CURRENCY_ENV: &str = "ACME_ORDER_CURRENCY";
pub const ORDER_NUMBER_ENV: &str = "ACME_ORDER_NUMBER";

/// Demo settings, read from the environment with defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub order_number: String,
    pub currency: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            order_number: "PO12345".to_string(),
            currency: "USD".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            order_number: std::env::var(ORDER_NUMBER_ENV).unwrap_or(defaults.order_number),
            currency: std::env::var(ORDER_CURRENCY_ENV).unwrap_or(defaults.currency),
        }
    }
}

/// What the demo produced.
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    pub supplier: Supplier,
    pub order: PurchaseOrder,
    pub total: Money,
}

/// Build the sample supplier and order placed at `order_date`.
pub fn run(config: &DemoConfig, order_date: DateTime<Utc>) -> DomainResult<DemoOutcome> {
    let address = Address::new("Main St", "1213", "Anytown", Some("CA"), "12345", "USA")?;
    let supplier = Supplier::new("SUP001", "Acme Supplies", address)?;
    tracing::info!(
        supplier = %supplier.supplier_id(),
        address = %supplier.address(),
        "supplier registered"
    );

    let mut order = PurchaseOrder::new(
        config.order_number.as_str(),
        SupplierId::new(supplier.identifier())?,
        order_date,
        &config.currency,
    )?;
    order.add_item(ProductId::new(), 10, Decimal::new(1500, 2))?;
    order.add_item(ProductId::new(), 5, Decimal::new(2500, 2))?;

    let total = order.calculate_order_total();
    tracing::info!(
        order_number = order.order_number(),
        items = order.items().len(),
        total = %total,
        "purchase order totalled"
    );

    Ok(DemoOutcome {
        supplier,
        order,
        total,
    })
}
