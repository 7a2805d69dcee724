//! Order records, enums and the nested create/update request shapes.

use serde::{Deserialize, Serialize};

use super::{FilterMode, SortOrder};

/// Delivery method for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupDelivery {
    Pickup,
    Delivery,
    Gojek,
    Citytran,
    Paxel,
    Daytrans,
    Baraya,
    Lintas,
    Bineka,
    Jne,
}

impl PickupDelivery {
    pub const ALL: &'static [PickupDelivery] = &[
        PickupDelivery::Pickup,
        PickupDelivery::Delivery,
        PickupDelivery::Gojek,
        PickupDelivery::Citytran,
        PickupDelivery::Paxel,
        PickupDelivery::Daytrans,
        PickupDelivery::Baraya,
        PickupDelivery::Lintas,
        PickupDelivery::Bineka,
        PickupDelivery::Jne,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PickupDelivery::Pickup => "Pickup",
            PickupDelivery::Delivery => "Delivery",
            PickupDelivery::Gojek => "Gojek",
            PickupDelivery::Citytran => "Citytran",
            PickupDelivery::Paxel => "Paxel",
            PickupDelivery::Daytrans => "Daytrans",
            PickupDelivery::Baraya => "Baraya",
            PickupDelivery::Lintas => "Lintas",
            PickupDelivery::Bineka => "Bineka",
            PickupDelivery::Jne => "Jne",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}

impl Default for PickupDelivery {
    fn default() -> Self {
        PickupDelivery::Pickup
    }
}

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payment {
    Tunai,
    #[serde(rename = "Kartu Kredit")]
    KartuKredit,
    #[serde(rename = "Transfer Bank")]
    TransferBank,
    #[serde(rename = "QRIS")]
    Qris,
}

impl Payment {
    pub const ALL: &'static [Payment] = &[
        Payment::Tunai,
        Payment::KartuKredit,
        Payment::TransferBank,
        Payment::Qris,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Payment::Tunai => "Tunai",
            Payment::KartuKredit => "Kartu Kredit",
            Payment::TransferBank => "Transfer Bank",
            Payment::Qris => "QRIS",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}

impl Default for Payment {
    fn default() -> Self {
        Payment::Tunai
    }
}

/// Payment progress of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Downpayment,
    #[serde(rename = "Belum bayar")]
    BelumBayar,
    Lunas,
}

impl OrderStatus {
    pub const ALL: &'static [OrderStatus] = &[
        OrderStatus::Downpayment,
        OrderStatus::BelumBayar,
        OrderStatus::Lunas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Downpayment => "Downpayment",
            OrderStatus::BelumBayar => "Belum bayar",
            OrderStatus::Lunas => "Lunas",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::BelumBayar
    }
}

/// Line item snapshot inside an order response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item_id: u64,
    pub quantity: u32,
    pub item_name: String,
    pub item_price: i64,
}

/// Complete order as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: u64,
    pub po: String,
    pub buyer_id: u64,
    pub recipient_id: u64,
    pub order_date: String,
    pub delivery_date: String,
    pub total_purchase: i64,
    pub pickup_delivery: PickupDelivery,
    pub shipping_cost: i64,
    pub grand_total: i64,
    pub payment: Payment,
    pub order_status: OrderStatus,
    #[serde(default)]
    pub note: Option<String>,
    pub order_items: Vec<OrderItem>,
    pub created_at: String,
    pub updated_at: String,
}

/// Phone sub-object of a person upsert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPhone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_id: Option<u64>,
    pub phone_number: String,
    pub preferred: bool,
}

/// Address sub-object of a person upsert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<u64>,
    pub address: String,
    pub preferred: bool,
}

/// Buyer/recipient upsert: an existing id, or enough data to create one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    pub person_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PersonPhone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PersonAddress>,
}

/// Line item in a create/update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub item_id: u64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateRequest {
    pub po: String,
    pub buyer: PersonUpsert,
    pub recipient: PersonUpsert,
    pub order_date: String,
    pub delivery_date: String,
    pub pickup_delivery: PickupDelivery,
    pub shipping_cost: i64,
    pub payment: Payment,
    pub order_status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub items: Vec<OrderItemRequest>,
}

/// PATCH body; absent fields are omitted, not null
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer: Option<PersonUpsert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<PersonUpsert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_delivery: Option<PickupDelivery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItemRequest>>,
}

/// Sortable order columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderSortField {
    Po,
    OrderDate,
    DeliveryDate,
    TotalPurchase,
    GrandTotal,
}

impl OrderSortField {
    pub const ALL: &'static [OrderSortField] = &[
        OrderSortField::Po,
        OrderSortField::OrderDate,
        OrderSortField::DeliveryDate,
        OrderSortField::TotalPurchase,
        OrderSortField::GrandTotal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSortField::Po => "po",
            OrderSortField::OrderDate => "orderDate",
            OrderSortField::DeliveryDate => "deliveryDate",
            OrderSortField::TotalPurchase => "totalPurchase",
            OrderSortField::GrandTotal => "grandTotal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderSortField::Po => "PO",
            OrderSortField::OrderDate => "Order Date",
            OrderSortField::DeliveryDate => "Delivery Date",
            OrderSortField::TotalPurchase => "Total Purchase",
            OrderSortField::GrandTotal => "Grand Total",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}

/// List query for `GET /order`. Field order is the query-string order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    pub po: Option<String>,
    pub buyer_id: Option<u64>,
    pub recipient_id: Option<u64>,
    pub order_status: Option<OrderStatus>,
    pub payment: Option<Payment>,
    pub sort_field: Option<OrderSortField>,
    pub sort_order: Option<SortOrder>,
    pub mode: Option<FilterMode>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order_json() -> &'static str {
        r#"{
            "orderId": 12,
            "po": "PO-2025-001",
            "buyerId": 3,
            "recipientId": 4,
            "orderDate": "2025-02-01T00:00:00Z",
            "deliveryDate": "2025-02-08T00:00:00Z",
            "totalPurchase": 150000,
            "pickupDelivery": "Gojek",
            "shippingCost": 20000,
            "grandTotal": 170000,
            "payment": "Kartu Kredit",
            "orderStatus": "Belum bayar",
            "note": null,
            "orderItems": [
                {"itemId": 7, "quantity": 3, "itemName": "Kopi", "itemPrice": 50000}
            ],
            "createdAt": "2025-02-01T08:00:00Z",
            "updatedAt": "2025-02-01T08:00:00Z"
        }"#
    }

    #[test]
    fn test_order_decodes_with_spaced_enum_values() {
        let order: Order = serde_json::from_str(sample_order_json()).unwrap();
        assert_eq!(order.order_id, 12);
        assert_eq!(order.payment, Payment::KartuKredit);
        assert_eq!(order.order_status, OrderStatus::BelumBayar);
        assert_eq!(order.pickup_delivery, PickupDelivery::Gojek);
        assert_eq!(order.note, None);
        assert_eq!(order.order_items.len(), 1);
        assert_eq!(order.order_items[0].item_name, "Kopi");
    }

    #[test]
    fn test_enum_as_str_matches_wire_format() {
        for payment in Payment::ALL {
            assert_eq!(serde_json::to_value(payment).unwrap(), payment.as_str());
        }
        for status in OrderStatus::ALL {
            assert_eq!(serde_json::to_value(status).unwrap(), status.as_str());
        }
        for method in PickupDelivery::ALL {
            assert_eq!(serde_json::to_value(method).unwrap(), method.as_str());
        }
        for field in OrderSortField::ALL {
            assert_eq!(serde_json::to_value(field).unwrap(), field.as_str());
        }
    }

    #[test]
    fn test_create_request_omits_absent_sub_objects() {
        let body = OrderCreateRequest {
            po: "PO-1".into(),
            buyer: PersonUpsert {
                person_id: Some(3),
                person_name: "Ani".into(),
                phone: None,
                address: None,
            },
            recipient: PersonUpsert {
                person_id: None,
                person_name: "Budi".into(),
                phone: Some(PersonPhone {
                    phone_id: None,
                    phone_number: "08123".into(),
                    preferred: true,
                }),
                address: None,
            },
            order_date: "2025-02-01".into(),
            delivery_date: "2025-02-08".into(),
            pickup_delivery: PickupDelivery::Pickup,
            shipping_cost: 0,
            payment: Payment::Tunai,
            order_status: OrderStatus::BelumBayar,
            note: None,
            items: vec![OrderItemRequest {
                item_id: 7,
                quantity: 2,
                item_name: None,
                item_price: None,
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("note").is_none());
        assert!(json["buyer"].get("phone").is_none());
        assert_eq!(json["buyer"]["personId"], 3);
        assert!(json["recipient"].get("personId").is_none());
        assert_eq!(json["recipient"]["phone"]["phoneNumber"], "08123");
        assert!(json["items"][0].get("itemName").is_none());
        assert_eq!(json["orderStatus"], "Belum bayar");
    }
}
