use serde::{Deserialize, Serialize};

use acme_core::{DomainError, DomainResult, Entity, ValueObject, ensure_not_blank};
use acme_shared::Address;

/// Supplier identifier (free-form business key such as `SUP001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SupplierId(String);

impl SupplierId {
    pub fn new(identifier: impl Into<String>) -> DomainResult<Self> {
        let identifier = identifier.into();
        ensure_not_blank("supplier_id", &identifier)?;
        Ok(Self(identifier))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for SupplierId {}

impl core::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for SupplierId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SupplierId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SupplierId> for String {
    fn from(value: SupplierId) -> Self {
        value.0
    }
}

/// Entity: Supplier.
///
/// Immutable snapshot; identity is the `SupplierId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    address: Address,
}

impl Supplier {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        address: Address,
    ) -> DomainResult<Self> {
        let id = SupplierId::new(identifier)?;
        let name = name.into();
        ensure_not_blank("name", &name)?;
        Ok(Self { id, name, address })
    }

    /// Raw identifier string.
    pub fn identifier(&self) -> &str {
        self.id.as_str()
    }

    pub fn supplier_id(&self) -> &SupplierId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_address() -> Address {
        Address::new("Main St", "1213", "Anytown", Some("CA"), "12345", "USA").unwrap()
    }

    #[test]
    fn supplier_exposes_its_parts() {
        let supplier = Supplier::new("SUP001", "Acme Supplies", test_address()).unwrap();
        assert_eq!(supplier.identifier(), "SUP001");
        assert_eq!(supplier.supplier_id(), &SupplierId::new("SUP001").unwrap());
        assert_eq!(supplier.id(), supplier.supplier_id());
        assert_eq!(supplier.name(), "Acme Supplies");
        assert_eq!(supplier.address(), &test_address());
    }

    #[test]
    fn suppliers_with_the_same_id_share_identity() {
        let original = Supplier::new("SUP001", "Acme Supplies", test_address()).unwrap();
        let moved = Supplier::new(
            String::from("SUP001"),
            "Acme Supplies Ltd",
            Address::new("Elm St", "7", "Othertown", None, "54321", "USA").unwrap(),
        )
        .unwrap();
        let other = Supplier::new("SUP002", "Acme Supplies", test_address()).unwrap();

        assert_ne!(original, moved);
        assert!(original.same_identity_as(&moved));
        assert!(!original.same_identity_as(&other));
    }

    #[test]
    fn supplier_rejects_blank_identifier() {
        let err = Supplier::new("  ", "Acme Supplies", test_address()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.argument(), "supplier_id");
    }

    #[test]
    fn supplier_rejects_blank_name() {
        let err = Supplier::new("SUP001", "", test_address()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.argument(), "name");
    }

    #[test]
    fn supplier_id_compares_by_value() {
        assert_eq!(SupplierId::new("SUP001").unwrap(), "SUP001".parse::<SupplierId>().unwrap());
        assert_ne!(SupplierId::new("SUP001").unwrap(), SupplierId::new("SUP002").unwrap());
        assert_eq!(SupplierId::new("SUP001").unwrap().to_string(), "SUP001");
    }

    #[test]
    fn supplier_id_rejects_blank_values() {
        for raw in ["", " ", "\n\t"] {
            assert!(SupplierId::new(raw).unwrap_err().is_invalid_argument());
        }
    }

    #[test]
    fn supplier_id_deserialization_validates() {
        let id: SupplierId = serde_json::from_str(r#""SUP001""#).unwrap();
        assert_eq!(id.as_str(), "SUP001");
        assert!(serde_json::from_str::<SupplierId>(r#""""#).is_err());
    }
}
