use core::fmt;

use serde::{Deserialize, Serialize};

use acme_core::{DomainResult, ValueObject, ensure_not_blank};

/// Physical postal address.
///
/// All parts are required except `state_or_region`. A blank
/// `state_or_region` is stored as absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AddressFields")]
pub struct Address {
    street: String,
    number: String,
    city: String,
    state_or_region: Option<String>,
    postal_code: String,
    country: String,
}

/// Unvalidated address parts, as they arrive from callers or payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddressFields {
    pub street: String,
    pub number: String,
    pub city: String,
    #[serde(default)]
    pub state_or_region: Option<String>,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        city: impl Into<String>,
        state_or_region: Option<&str>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::from_fields(AddressFields {
            street: street.into(),
            number: number.into(),
            city: city.into(),
            state_or_region: state_or_region.map(str::to_owned),
            postal_code: postal_code.into(),
            country: country.into(),
        })
    }

    /// Validate `fields`; the first blank required part is reported.
    pub fn from_fields(fields: AddressFields) -> DomainResult<Self> {
        ensure_not_blank("street", &fields.street)?;
        ensure_not_blank("number", &fields.number)?;
        ensure_not_blank("city", &fields.city)?;
        ensure_not_blank("postal_code", &fields.postal_code)?;
        ensure_not_blank("country", &fields.country)?;

        Ok(Self {
            street: fields.street,
            number: fields.number,
            city: fields.city,
            state_or_region: fields.state_or_region.filter(|s| !s.trim().is_empty()),
            postal_code: fields.postal_code,
            country: fields.country,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state_or_region(&self) -> Option<&str> {
        self.state_or_region.as_deref()
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl ValueObject for Address {}

impl TryFrom<AddressFields> for Address {
    type Error = acme_core::DomainError;

    fn try_from(value: AddressFields) -> Result<Self, Self::Error> {
        Self::from_fields(value)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}, ", self.street, self.number, self.city)?;
        if let Some(state) = &self.state_or_region {
            write!(f, "{state}, ")?;
        }
        write!(f, "{}, {}", self.postal_code, self.country)
    }
}
