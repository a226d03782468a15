//! Product references as seen from procurement.

acme_core::uuid_identifier!(
    /// Product identifier (UUID-based, never nil).
    pub struct ProductId,
    "product_id"
);

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(ProductId::new(), ProductId::new());
    }

    #[test]
    fn nil_uuid_is_rejected() {
        let err = ProductId::from_uuid(Uuid::nil()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.argument(), "product_id");
    }

    #[test]
    fn display_is_the_hyphenated_uuid() {
        let uuid = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let id = ProductId::from_uuid(uuid).unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(id.to_string().parse::<ProductId>().unwrap(), id);
    }

    #[test]
    fn serializes_as_plain_uuid_string() {
        let uuid = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let id = ProductId::from_uuid(uuid).unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            r#""67e55044-10b1-426f-9247-bb680e5fe0c8""#
        );
        assert!(
            serde_json::from_str::<ProductId>(r#""00000000-0000-0000-0000-000000000000""#)
                .is_err()
        );
    }
}
