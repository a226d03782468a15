use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use acme_core::AggregateRoot;
use acme_demo::{DemoConfig, run};
use acme_shared::Money;

#[test]
fn default_demo_totals_275_usd() {
    let order_date = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
    let outcome = run(&DemoConfig::default(), order_date).unwrap();

    assert_eq!(outcome.supplier.identifier(), "SUP001");
    assert_eq!(
        outcome.supplier.address().to_string(),
        "Main St 1213, Anytown, CA, 12345, USA"
    );

    let order = &outcome.order;
    assert_eq!(order.order_number(), "PO12345");
    assert_eq!(order.supplier_id().as_str(), "SUP001");
    assert_eq!(order.order_date(), order_date);
    assert_eq!(order.version(), 2);

    let line_totals: Vec<Money> = order
        .items()
        .iter()
        .map(|item| item.calculate_item_total())
        .collect();
    assert_eq!(
        line_totals,
        vec![
            Money::new(Decimal::new(15000, 2), "USD").unwrap(),
            Money::new(Decimal::new(12500, 2), "USD").unwrap(),
        ]
    );
    assert_ne!(order.items()[0].product_id(), order.items()[1].product_id());

    assert_eq!(outcome.total, Money::new(Decimal::new(27500, 2), "USD").unwrap());
    assert_eq!(format!("order total: {}", outcome.total), "order total: 275.00 USD");
}

#[test]
fn demo_honours_configured_currency() {
    let config = DemoConfig {
        order_number: "PO-EUR-1".to_string(),
        currency: "EUR".to_string(),
    };
    let outcome = run(&config, Utc::now()).unwrap();
    assert_eq!(outcome.total.to_string(), "275.00 EUR");
}

#[test]
fn demo_rejects_invalid_configuration() {
    let config = DemoConfig {
        order_number: "PO1".to_string(),
        currency: "EURO".to_string(),
    };
    let err = run(&config, Utc::now()).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.argument(), "currency");

    let config = DemoConfig {
        order_number: "".to_string(),
        ..DemoConfig::default()
    };
    assert_eq!(run(&config, Utc::now()).unwrap_err().argument(), "order_number");
}
