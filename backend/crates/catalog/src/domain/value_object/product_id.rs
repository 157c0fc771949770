use kernel::id::Id;

pub struct ProductMarker;
pub type ProductId = Id<ProductMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_is_v4() {
        assert_eq!(ProductId::new().as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ProductId::parse_str("not-a-uuid").is_err());
        assert!(ProductId::parse_str("").is_err());
    }
}
