use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use acme_core::{AggregateRoot, DomainError, DomainResult, ensure_not_blank};
use acme_scm::SupplierId;
use acme_shared::{Currency, Money};

use crate::product::ProductId;

/// Purchase order line item.
///
/// Immutable once built; only `PurchaseOrder::add_item` creates them inside an
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOrderItem {
    product_id: ProductId,
    quantity: i64,
    unit_price: Money,
    total: Money,
}

impl PurchaseOrderItem {
    /// Fails with `OutOfRange` when `quantity <= 0` or when
    /// `unit_price * quantity` does not fit in a decimal amount.
    pub fn new(product_id: ProductId, quantity: i64, unit_price: Money) -> DomainResult<Self> {
        ensure_positive_quantity(quantity)?;
        let total = unit_price.multiply(quantity)?;
        Ok(Self {
            product_id,
            quantity,
            unit_price,
            total,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> &Money {
        &self.unit_price
    }

    /// `unit_price * quantity`, in the unit price's currency.
    pub fn calculate_item_total(&self) -> Money {
        self.total.clone()
    }
}

/// Aggregate root: PurchaseOrder.
///
/// The currency is fixed at creation and every item's unit price is built in
/// that currency, so totals never mix currencies. Items are append-only and
/// keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOrder {
    order_number: String,
    supplier_id: SupplierId,
    order_date: DateTime<Utc>,
    currency: Currency,
    items: Vec<PurchaseOrderItem>,
    version: u64,
}

impl PurchaseOrder {
    pub fn new(
        order_number: impl Into<String>,
        supplier_id: SupplierId,
        order_date: DateTime<Utc>,
        currency: &str,
    ) -> DomainResult<Self> {
        let order_number = order_number.into();
        ensure_not_blank("order_number", &order_number)?;
        let currency = Currency::new(currency)?;

        Ok(Self {
            order_number,
            supplier_id,
            order_date,
            currency,
            items: Vec::new(),
            version: 0,
        })
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn supplier_id(&self) -> &SupplierId {
        &self.supplier_id
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[PurchaseOrderItem] {
        &self.items
    }

    /// Append a line priced in the order's currency.
    ///
    /// Same product may be added more than once; lines are never merged.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        unit_price_amount: Decimal,
    ) -> DomainResult<()> {
        ensure_positive_quantity(quantity)?;
        if unit_price_amount < Decimal::ZERO {
            return Err(DomainError::out_of_range(
                "unit_price_amount",
                "unit price amount cannot be negative",
            ));
        }

        let unit_price = Money::in_currency(unit_price_amount, self.currency.clone());
        let item = PurchaseOrderItem::new(product_id, quantity, unit_price)?;
        self.calculate_order_total()
            .add(&item.calculate_item_total())
            .map_err(|_| {
                DomainError::out_of_range(
                    "unit_price_amount",
                    "order total would exceed the representable amount",
                )
            })?;

        tracing::debug!(
            order_number = %self.order_number,
            product_id = %product_id,
            quantity,
            unit_price = %item.unit_price(),
            "purchase order item added"
        );

        self.items.push(item);
        self.version += 1;
        Ok(())
    }

    /// Sum of all line totals; zero in the order currency when empty.
    pub fn calculate_order_total(&self) -> Money {
        // Line totals are non-negative and `add_item` rejects any line that
        // would overflow the running sum, so this sum always fits.
        let total: Decimal = self
            .items
            .iter()
            .map(|item| item.calculate_item_total().amount())
            .sum();
        Money::in_currency(total, self.currency.clone())
    }
}

impl AggregateRoot for PurchaseOrder {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.order_number
    }

    fn version(&self) -> u64 {
        self.version
    }
}

fn ensure_positive_quantity(quantity: i64) -> DomainResult<()> {
    if quantity <= 0 {
        return Err(DomainError::out_of_range(
            "quantity",
            "quantity must be greater than zero",
        ));
    }
    Ok(())
}
