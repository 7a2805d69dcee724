//! Item records and their request/filter shapes.

use serde::{Deserialize, Serialize};

use super::{FilterMode, SortOrder};

/// Inventory item as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: u64,
    pub item_name: String,
    pub price: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Sortable item columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemSortField {
    ItemName,
    Price,
}

impl ItemSortField {
    pub const ALL: &'static [ItemSortField] = &[ItemSortField::ItemName, ItemSortField::Price];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemSortField::ItemName => "itemName",
            ItemSortField::Price => "price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemSortField::ItemName => "Item Name",
            ItemSortField::Price => "Price",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}

/// List query for `GET /item`. Field order is the query-string order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFilter {
    pub item_name: Option<String>,
    pub price: Option<i64>,
    pub sort_field: Option<ItemSortField>,
    pub sort_order: Option<SortOrder>,
    pub mode: Option<FilterMode>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCreateRequest {
    pub item_name: String,
    pub price: i64,
}

/// PATCH body; absent fields are omitted, not null
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_decodes_camel_case() {
        let item: Item = serde_json::from_str(
            r#"{"itemId":7,"itemName":"Kopi","price":25000,
                "createdAt":"2025-01-05T09:00:00Z","updatedAt":"2025-01-06T10:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(item.item_id, 7);
        assert_eq!(item.item_name, "Kopi");
        assert_eq!(item.price, 25000);
    }

    #[test]
    fn test_sort_field_wire_values() {
        assert_eq!(serde_json::to_value(ItemSortField::ItemName).unwrap(), "itemName");
        assert_eq!(ItemSortField::from_value("price"), Some(ItemSortField::Price));
        assert_eq!(ItemSortField::from_value("name"), None);
    }

    #[test]
    fn test_update_request_omits_absent_fields() {
        let body = ItemUpdateRequest {
            item_name: None,
            price: Some(1200),
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"price":1200}"#);
    }
}
