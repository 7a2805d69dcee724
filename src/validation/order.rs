//! Order form rules, including the nested buyer/recipient person upserts
//! and the line-item list.

use crate::models::{
    Order, OrderCreateRequest, OrderItemRequest, OrderStatus, OrderUpdateRequest, Payment,
    PersonAddress, PersonPhone, PersonUpsert, PickupDelivery,
};

use super::{coerce_int, CoerceError, FieldErrors};

pub const PO_MAX: usize = 255;
pub const NOTE_MAX: usize = 5000;
pub const PERSON_NAME_MAX: usize = 100;
pub const PHONE_MAX: usize = 20;
pub const ADDRESS_MAX: usize = 500;
pub const SHIPPING_MAX: i64 = 50_000_000;
pub const QUANTITY_MAX: i64 = 10_000;
pub const ITEM_NAME_SNAPSHOT_MAX: usize = 255;
pub const ITEMS_MAX: usize = 1000;

/// Raw buyer/recipient sub-form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonFormData {
    pub person_id: Option<u64>,
    pub person_name: String,
    pub phone_id: Option<u64>,
    pub phone_number: String,
    pub phone_preferred: bool,
    pub address_id: Option<u64>,
    pub address: String,
    pub address_preferred: bool,
}

/// Raw line-item row state
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemFormData {
    pub item_id: String,
    pub quantity: String,
    pub item_name: String,
    pub item_price: String,
}

impl Default for OrderItemFormData {
    fn default() -> Self {
        Self {
            item_id: String::new(),
            quantity: "1".into(),
            item_name: String::new(),
            item_price: String::new(),
        }
    }
}

/// Raw form state for the order create/edit pages
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFormData {
    pub po: String,
    pub buyer: PersonFormData,
    pub recipient: PersonFormData,
    pub order_date: String,
    pub delivery_date: String,
    pub pickup_delivery: PickupDelivery,
    pub shipping_cost: String,
    pub payment: Payment,
    pub order_status: OrderStatus,
    pub note: String,
    pub items: Vec<OrderItemFormData>,
}

impl Default for OrderFormData {
    fn default() -> Self {
        Self {
            po: String::new(),
            buyer: PersonFormData::default(),
            recipient: PersonFormData::default(),
            order_date: String::new(),
            delivery_date: String::new(),
            pickup_delivery: PickupDelivery::default(),
            shipping_cost: "0".into(),
            payment: Payment::default(),
            order_status: OrderStatus::default(),
            note: String::new(),
            items: vec![OrderItemFormData::default()],
        }
    }
}

impl OrderFormData {
    /// Pre-fill the edit form from a fetched order. The response carries
    /// only the buyer/recipient ids, so the person names start empty, and
    /// the RFC3339 dates are truncated to their date part for the inputs.
    pub fn from_order(order: &Order) -> Self {
        Self {
            po: order.po.clone(),
            buyer: PersonFormData {
                person_id: Some(order.buyer_id),
                ..Default::default()
            },
            recipient: PersonFormData {
                person_id: Some(order.recipient_id),
                ..Default::default()
            },
            order_date: date_part(&order.order_date),
            delivery_date: date_part(&order.delivery_date),
            pickup_delivery: order.pickup_delivery,
            shipping_cost: order.shipping_cost.to_string(),
            payment: order.payment,
            order_status: order.order_status,
            note: order.note.clone().unwrap_or_default(),
            items: order
                .order_items
                .iter()
                .map(|item| OrderItemFormData {
                    item_id: item.item_id.to_string(),
                    quantity: item.quantity.to_string(),
                    item_name: item.item_name.clone(),
                    item_price: item.item_price.to_string(),
                })
                .collect(),
        }
    }
}

fn date_part(raw: &str) -> String {
    raw.split('T').next().unwrap_or(raw).to_string()
}

fn check_person(prefix: &str, person: &PersonFormData, errors: &mut FieldErrors) -> PersonUpsert {
    if person.person_name.is_empty() {
        errors.push(format!("{prefix}.personName"), "Person name is required");
    } else if person.person_name.chars().count() > PERSON_NAME_MAX {
        errors.push(format!("{prefix}.personName"), "Person name is too long");
    }

    // sub-objects only exist once the operator touched them
    let phone = if !person.phone_number.is_empty() || person.phone_preferred {
        if person.phone_number.is_empty() {
            errors.push(
                format!("{prefix}.phone.phoneNumber"),
                "Phone number is too short",
            );
        } else if person.phone_number.chars().count() > PHONE_MAX {
            errors.push(
                format!("{prefix}.phone.phoneNumber"),
                "Phone number is too long",
            );
        }
        Some(PersonPhone {
            phone_id: person.phone_id,
            phone_number: person.phone_number.clone(),
            preferred: person.phone_preferred,
        })
    } else {
        None
    };

    let address = if !person.address.is_empty() || person.address_preferred {
        if person.address.is_empty() {
            errors.push(format!("{prefix}.address.address"), "Address is too short");
        } else if person.address.chars().count() > ADDRESS_MAX {
            errors.push(format!("{prefix}.address.address"), "Address is too long");
        }
        Some(PersonAddress {
            address_id: person.address_id,
            address: person.address.clone(),
            preferred: person.address_preferred,
        })
    } else {
        None
    };

    PersonUpsert {
        person_id: person.person_id,
        person_name: person.person_name.clone(),
        phone,
        address,
    }
}

fn check_items(items: &[OrderItemFormData], errors: &mut FieldErrors) -> Vec<OrderItemRequest> {
    if items.is_empty() {
        errors.push("items", "At least one item is required");
        return Vec::new();
    }
    if items.len() > ITEMS_MAX {
        errors.push("items", "Too many items");
    }

    items
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let item_id = match coerce_int(&row.item_id) {
                Ok(id) if id > 0 => id as u64,
                _ => {
                    errors.push(
                        format!("items.{index}.itemId"),
                        "Item ID is required and must be positive",
                    );
                    0
                }
            };

            let quantity = match coerce_int(&row.quantity) {
                Err(CoerceError::NotANumber) => {
                    errors.push(format!("items.{index}.quantity"), "Quantity must be a number");
                    0
                }
                Err(CoerceError::NotAnInteger) => {
                    errors.push(
                        format!("items.{index}.quantity"),
                        "Quantity must be an integer",
                    );
                    0
                }
                Ok(quantity) if quantity < 1 => {
                    errors.push(
                        format!("items.{index}.quantity"),
                        "Quantity must be at least 1",
                    );
                    0
                }
                Ok(quantity) if quantity > QUANTITY_MAX => {
                    errors.push(format!("items.{index}.quantity"), "Quantity is too large");
                    0
                }
                Ok(quantity) => quantity as u32,
            };

            let item_name = if row.item_name.is_empty() {
                None
            } else {
                if row.item_name.chars().count() > ITEM_NAME_SNAPSHOT_MAX {
                    errors.push(format!("items.{index}.itemName"), "Item name is too long");
                }
                Some(row.item_name.clone())
            };

            let item_price = if row.item_price.trim().is_empty() {
                None
            } else {
                match coerce_int(&row.item_price) {
                    Ok(price) if price > 0 => Some(price),
                    _ => {
                        errors.push(
                            format!("items.{index}.itemPrice"),
                            "Item price must be positive",
                        );
                        None
                    }
                }
            };

            OrderItemRequest {
                item_id,
                quantity,
                item_name,
                item_price,
            }
        })
        .collect()
}

fn check_shipping(raw: &str, errors: &mut FieldErrors) -> i64 {
    match coerce_int(raw) {
        Err(CoerceError::NotANumber) => {
            errors.push("shippingCost", "Shipping cost must be a number");
            0
        }
        Err(CoerceError::NotAnInteger) => {
            errors.push("shippingCost", "Shipping cost must be an integer");
            0
        }
        Ok(cost) if cost < 0 => {
            errors.push("shippingCost", "Shipping cost cannot be negative");
            0
        }
        Ok(cost) if cost > SHIPPING_MAX => {
            errors.push("shippingCost", "Shipping cost is too large");
            0
        }
        Ok(cost) => cost,
    }
}

pub fn validate_order_create(form: &OrderFormData) -> Result<OrderCreateRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.po.is_empty() {
        errors.push("po", "PO number is required");
    } else if form.po.chars().count() > PO_MAX {
        errors.push("po", "PO number is too long");
    }

    let buyer = check_person("buyer", &form.buyer, &mut errors);
    let recipient = check_person("recipient", &form.recipient, &mut errors);

    if form.order_date.is_empty() {
        errors.push("orderDate", "Order date is required");
    }
    if form.delivery_date.is_empty() {
        errors.push("deliveryDate", "Delivery date is required");
    }

    let shipping_cost = check_shipping(&form.shipping_cost, &mut errors);

    if form.note.chars().count() > NOTE_MAX {
        errors.push("note", "Note is too long");
    }

    let items = check_items(&form.items, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(OrderCreateRequest {
        po: form.po.clone(),
        buyer,
        recipient,
        order_date: form.order_date.clone(),
        delivery_date: form.delivery_date.clone(),
        pickup_delivery: form.pickup_delivery,
        shipping_cost,
        payment: form.payment,
        order_status: form.order_status,
        note: if form.note.is_empty() {
            None
        } else {
            Some(form.note.clone())
        },
        items,
    })
}

pub fn validate_order_update(form: &OrderFormData) -> Result<OrderUpdateRequest, FieldErrors> {
    let request = validate_order_create(form)?;
    Ok(OrderUpdateRequest {
        po: Some(request.po),
        buyer: Some(request.buyer),
        recipient: Some(request.recipient),
        order_date: Some(request.order_date),
        delivery_date: Some(request.delivery_date),
        pickup_delivery: Some(request.pickup_delivery),
        shipping_cost: Some(request.shipping_cost),
        payment: Some(request.payment),
        order_status: Some(request.order_status),
        note: request.note,
        items: Some(request.items),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderItem, PickupDelivery};

    fn minimal_form() -> OrderFormData {
        OrderFormData {
            po: "PO-2025-001".into(),
            buyer: PersonFormData {
                person_name: "Ani".into(),
                ..Default::default()
            },
            recipient: PersonFormData {
                person_name: "Budi".into(),
                ..Default::default()
            },
            order_date: "2025-02-01".into(),
            delivery_date: "2025-02-08".into(),
            items: vec![OrderItemFormData {
                item_id: "7".into(),
                quantity: "2".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_valid_order() {
        let request = validate_order_create(&minimal_form()).unwrap();
        assert_eq!(request.po, "PO-2025-001");
        assert_eq!(request.buyer.person_name, "Ani");
        assert_eq!(request.buyer.phone, None);
        assert_eq!(request.shipping_cost, 0);
        assert_eq!(request.note, None);
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].item_id, 7);
        assert_eq!(request.items[0].quantity, 2);
    }

    #[test]
    fn test_po_required() {
        let mut form = minimal_form();
        form.po.clear();
        let errors = validate_order_create(&form).unwrap_err();
        assert_eq!(errors.message("po").as_deref(), Some("PO number is required"));
    }

    #[test]
    fn test_person_name_paths() {
        let mut form = minimal_form();
        form.buyer.person_name.clear();
        form.recipient.person_name = "x".repeat(101);
        let errors = validate_order_create(&form).unwrap_err();
        assert_eq!(
            errors.message("buyer.personName").as_deref(),
            Some("Person name is required")
        );
        assert_eq!(
            errors.message("recipient.personName").as_deref(),
            Some("Person name is too long")
        );
    }

    #[test]
    fn test_phone_included_once_touched() {
        let mut form = minimal_form();
        form.buyer.phone_number = "081234567890".into();
        form.buyer.phone_preferred = true;
        let request = validate_order_create(&form).unwrap();
        let phone = request.buyer.phone.unwrap();
        assert_eq!(phone.phone_number, "081234567890");
        assert!(phone.preferred);

        // preferred checked but no number typed: the sub-object exists and fails
        let mut form = minimal_form();
        form.recipient.phone_preferred = true;
        let errors = validate_order_create(&form).unwrap_err();
        assert_eq!(
            errors.message("recipient.phone.phoneNumber").as_deref(),
            Some("Phone number is too short")
        );
    }

    #[test]
    fn test_phone_and_address_length_limits() {
        let mut form = minimal_form();
        form.buyer.phone_number = "0".repeat(21);
        form.buyer.address = "a".repeat(501);
        let errors = validate_order_create(&form).unwrap_err();
        assert_eq!(
            errors.message("buyer.phone.phoneNumber").as_deref(),
            Some("Phone number is too long")
        );
        assert_eq!(
            errors.message("buyer.address.address").as_deref(),
            Some("Address is too long")
        );
    }

    #[test]
    fn test_dates_required() {
        let mut form = minimal_form();
        form.order_date.clear();
        form.delivery_date.clear();
        let errors = validate_order_create(&form).unwrap_err();
        assert_eq!(
            errors.message("orderDate").as_deref(),
            Some("Order date is required")
        );
        assert_eq!(
            errors.message("deliveryDate").as_deref(),
            Some("Delivery date is required")
        );
    }

    #[test]
    fn test_shipping_cost_bounds() {
        let mut form = minimal_form();
        form.shipping_cost = "-1".into();
        assert_eq!(
            validate_order_create(&form)
                .unwrap_err()
                .message("shippingCost")
                .as_deref(),
            Some("Shipping cost cannot be negative")
        );

        form.shipping_cost = "50000001".into();
        assert_eq!(
            validate_order_create(&form)
                .unwrap_err()
                .message("shippingCost")
                .as_deref(),
            Some("Shipping cost is too large")
        );
    }

    #[test]
    fn test_note_too_long() {
        let mut form = minimal_form();
        form.note = "n".repeat(5001);
        let errors = validate_order_create(&form).unwrap_err();
        assert_eq!(errors.message("note").as_deref(), Some("Note is too long"));
    }

    #[test]
    fn test_items_required_and_indexed_paths() {
        let mut form = minimal_form();
        form.items.clear();
        let errors = validate_order_create(&form).unwrap_err();
        assert_eq!(
            errors.message("items").as_deref(),
            Some("At least one item is required")
        );

        let mut form = minimal_form();
        form.items = vec![
            OrderItemFormData {
                item_id: "7".into(),
                quantity: "1".into(),
                ..Default::default()
            },
            OrderItemFormData {
                item_id: "0".into(),
                quantity: "20000".into(),
                ..Default::default()
            },
        ];
        let errors = validate_order_create(&form).unwrap_err();
        assert_eq!(
            errors.message("items.1.itemId").as_deref(),
            Some("Item ID is required and must be positive")
        );
        assert_eq!(
            errors.message("items.1.quantity").as_deref(),
            Some("Quantity is too large")
        );
        assert!(!errors.has("items.0.itemId"));
    }

    #[test]
    fn test_po_too_long() {
        let mut form = minimal_form();
        form.po = "p".repeat(256);
        let errors = validate_order_create(&form).unwrap_err();
        assert_eq!(
            errors.message("po").as_deref(),
            Some("PO number is too long")
        );

        let mut form = minimal_form();
        form.po = "p".repeat(255);
        assert!(validate_order_create(&form).is_ok());
    }

    #[test]
    fn test_too_many_items() {
        let mut form = minimal_form();
        form.items = (0..1001)
            .map(|_| OrderItemFormData {
                item_id: "7".into(),
                quantity: "1".into(),
                ..Default::default()
            })
            .collect();
        let errors = validate_order_create(&form).unwrap_err();
        assert_eq!(errors.message("items").as_deref(), Some("Too many items"));

        form.items.truncate(1000);
        assert!(validate_order_create(&form).is_ok());
    }

    #[test]
    fn test_item_snapshots_optional() {
        let mut form = minimal_form();
        form.items[0].item_name = "Kopi".into();
        form.items[0].item_price = "50000".into();
        let request = validate_order_create(&form).unwrap();
        assert_eq!(request.items[0].item_name.as_deref(), Some("Kopi"));
        assert_eq!(request.items[0].item_price, Some(50000));

        let mut form = minimal_form();
        form.items[0].item_price = "-5".into();
        let errors = validate_order_create(&form).unwrap_err();
        assert_eq!(
            errors.message("items.0.itemPrice").as_deref(),
            Some("Item price must be positive")
        );
    }

    #[test]
    fn test_update_wraps_everything_in_some() {
        let request = validate_order_update(&minimal_form()).unwrap();
        assert_eq!(request.po.as_deref(), Some("PO-2025-001"));
        assert!(request.buyer.is_some());
        assert_eq!(request.note, None);
        assert_eq!(request.items.unwrap().len(), 1);
    }

    #[test]
    fn test_from_order_prefills_edit_form() {
        let order = Order {
            order_id: 12,
            po: "PO-9".into(),
            buyer_id: 3,
            recipient_id: 4,
            order_date: "2025-02-01T00:00:00Z".into(),
            delivery_date: "2025-02-08T00:00:00Z".into(),
            total_purchase: 100000,
            pickup_delivery: PickupDelivery::Gojek,
            shipping_cost: 20000,
            grand_total: 120000,
            payment: Payment::Qris,
            order_status: OrderStatus::Lunas,
            note: Some("fragile".into()),
            order_items: vec![OrderItem {
                item_id: 7,
                quantity: 2,
                item_name: "Kopi".into(),
                item_price: 50000,
            }],
            created_at: "2025-02-01T08:00:00Z".into(),
            updated_at: "2025-02-01T08:00:00Z".into(),
        };
        let form = OrderFormData::from_order(&order);
        assert_eq!(form.po, "PO-9");
        assert_eq!(form.buyer.person_id, Some(3));
        assert_eq!(form.buyer.person_name, "");
        assert_eq!(form.order_date, "2025-02-01");
        assert_eq!(form.shipping_cost, "20000");
        assert_eq!(form.note, "fragile");
        assert_eq!(form.items[0].item_id, "7");
        assert_eq!(form.items[0].item_price, "50000");
    }
}
