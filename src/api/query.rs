//! Filter-to-query-string serialization.
//!
//! Filters serialize through serde_json (with `preserve_order`), so the
//! query string follows struct declaration order. Null fields are skipped;
//! anything that is not a string, number or bool is rejected.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::Value;

use super::ApiError;

// RFC 3986 unreserved characters stay as-is
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY).to_string()
}

/// Serialize a filter struct into `key=value&...` pairs
pub fn to_query_string<T: Serialize>(filter: &T) -> Result<String, ApiError> {
    let value = serde_json::to_value(filter)
        .map_err(|err| ApiError::new(format!("Failed to serialize query: {err}")))?;
    let map = value
        .as_object()
        .ok_or_else(|| ApiError::new("Invalid query: expected an object of parameters"))?;

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let text = match value {
            Value::Null => continue,
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            _ => {
                return Err(ApiError::new(format!(
                    "Invalid query param \"{key}\": expected a primitive value"
                )))
            }
        };
        pairs.push(format!("{}={}", encode(key), encode(&text)));
    }
    Ok(pairs.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FilterMode, ItemFilter, ItemSortField, OrderFilter, OrderSortField, OrderStatus, Payment,
        SortOrder,
    };

    #[test]
    fn test_skips_absent_fields() {
        let filter = ItemFilter {
            page: Some(1),
            page_size: Some(10),
            ..Default::default()
        };
        assert_eq!(to_query_string(&filter).unwrap(), "page=1&pageSize=10");
    }

    #[test]
    fn test_declaration_order_and_camel_case_keys() {
        let filter = ItemFilter {
            item_name: Some("kopi".into()),
            price: Some(25000),
            sort_field: Some(ItemSortField::Price),
            sort_order: Some(SortOrder::Desc),
            mode: Some(FilterMode::Or),
            page: Some(2),
            page_size: Some(25),
        };
        assert_eq!(
            to_query_string(&filter).unwrap(),
            "itemName=kopi&price=25000&sortField=price&sortOrder=desc&mode=or&page=2&pageSize=25"
        );
    }

    #[test]
    fn test_percent_encodes_values() {
        let filter = ItemFilter {
            item_name: Some("teh & gula 50%".into()),
            ..Default::default()
        };
        assert_eq!(
            to_query_string(&filter).unwrap(),
            "itemName=teh%20%26%20gula%2050%25"
        );
    }

    #[test]
    fn test_order_filter_enum_values() {
        let filter = OrderFilter {
            po: Some("PO-1".into()),
            order_status: Some(OrderStatus::BelumBayar),
            payment: Some(Payment::KartuKredit),
            sort_field: Some(OrderSortField::OrderDate),
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        };
        assert_eq!(
            to_query_string(&filter).unwrap(),
            "po=PO-1&orderStatus=Belum%20bayar&payment=Kartu%20Kredit&sortField=orderDate&sortOrder=asc"
        );
    }

    #[test]
    fn test_rejects_non_primitive_values() {
        #[derive(Serialize)]
        struct BadFilter {
            tags: Vec<String>,
        }
        let err = to_query_string(&BadFilter {
            tags: vec!["a".into()],
        })
        .unwrap_err();
        assert!(err.message.contains("\"tags\""));
        assert!(err.message.contains("primitive"));
    }

    #[test]
    fn test_rejects_non_object_root() {
        let err = to_query_string(&42u32).unwrap_err();
        assert!(err.message.contains("expected an object"));
    }
}
