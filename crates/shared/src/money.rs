use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use acme_core::{DomainError, DomainResult, ValueObject};

/// ISO 4217 currency code (e.g. `USD`, `EUR`).
///
/// Exactly three characters and not blank. The code is stored as given; no
/// registry lookup is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "currency",
                "cannot be null or empty",
            ));
        }
        if code.chars().count() != 3 {
            return Err(DomainError::invalid_argument(
                "currency",
                format!("`{code}` is not a 3-character ISO 4217 code"),
            ));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Currency {}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Currency {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

/// Monetary amount in a single currency.
///
/// Amounts are exact decimals; equality compares the numeric amount (so
/// `150.0 USD == 150.00 USD`) and the currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Build a `Money` value, validating the currency code.
    pub fn new(amount: Decimal, currency: &str) -> DomainResult<Self> {
        Ok(Self::in_currency(amount, Currency::new(currency)?))
    }

    /// Build a `Money` value from an already validated currency.
    pub fn in_currency(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Additive identity for `currency`.
    pub fn zero(currency: Currency) -> Self {
        Self::in_currency(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Sum of two amounts in the same currency.
    ///
    /// Mixing currencies is rejected; no conversion is ever attempted.
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other)?;
        let amount = self.amount.checked_add(other.amount).ok_or_else(|| {
            DomainError::out_of_range("amount", "sum exceeds the representable amount")
        })?;
        Ok(Self::in_currency(amount, self.currency.clone()))
    }

    /// Scale by an integer quantity, keeping the currency.
    pub fn multiply(&self, quantity: i64) -> DomainResult<Money> {
        let amount = self
            .amount
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| {
                DomainError::out_of_range("quantity", "product exceeds the representable amount")
            })?;
        Ok(Self::in_currency(amount, self.currency.clone()))
    }

    fn ensure_same_currency(&self, other: &Money) -> DomainResult<()> {
        if self.currency != other.currency {
            return Err(DomainError::invalid_argument(
                "currency",
                format!(
                    "currency mismatch: {} vs {}",
                    self.currency, other.currency
                ),
            ));
        }
        Ok(())
    }
}

impl ValueObject for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
