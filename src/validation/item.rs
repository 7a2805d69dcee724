//! Item form rules: name 1..=100 chars, price an integer 1..=50,000,000.

use crate::models::{ItemCreateRequest, ItemUpdateRequest};

use super::{coerce_int, CoerceError, FieldErrors};

pub const ITEM_NAME_MAX: usize = 100;
pub const PRICE_MAX: i64 = 50_000_000;

/// Raw form state for the item create/edit pages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFormData {
    pub item_name: String,
    pub price: String,
}

fn check_name(name: &str, errors: &mut FieldErrors) {
    if name.is_empty() {
        errors.push("itemName", "Item name is required");
    } else if name.chars().count() > ITEM_NAME_MAX {
        errors.push("itemName", "Item name is too long");
    }
}

fn check_price(raw: &str, errors: &mut FieldErrors) -> Option<i64> {
    match coerce_int(raw) {
        Err(CoerceError::NotANumber) => {
            errors.push("price", "Price must be a number");
            None
        }
        Err(CoerceError::NotAnInteger) => {
            errors.push("price", "Price must be an integer");
            None
        }
        Ok(price) if price < 1 => {
            errors.push("price", "Price must be at least 1");
            None
        }
        Ok(price) if price > PRICE_MAX => {
            errors.push("price", "Price is too big");
            None
        }
        Ok(price) => Some(price),
    }
}

pub fn validate_item_create(form: &ItemFormData) -> Result<ItemCreateRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    check_name(&form.item_name, &mut errors);
    let price = check_price(&form.price, &mut errors);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ItemCreateRequest {
        item_name: form.item_name.clone(),
        price: price.unwrap_or_default(),
    })
}

pub fn validate_item_update(form: &ItemFormData) -> Result<ItemUpdateRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    check_name(&form.item_name, &mut errors);
    let price = check_price(&form.price, &mut errors);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ItemUpdateRequest {
        item_name: Some(form.item_name.clone()),
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_builds_request() {
        let form = ItemFormData {
            item_name: "Kopi Gayo".into(),
            price: "25000".into(),
        };
        let request = validate_item_create(&form).unwrap();
        assert_eq!(request.item_name, "Kopi Gayo");
        assert_eq!(request.price, 25000);
    }

    #[test]
    fn test_empty_name_is_required() {
        let form = ItemFormData {
            item_name: "".into(),
            price: "100".into(),
        };
        let errors = validate_item_create(&form).unwrap_err();
        assert_eq!(
            errors.message("itemName").as_deref(),
            Some("Item name is required")
        );
    }

    #[test]
    fn test_name_too_long() {
        let form = ItemFormData {
            item_name: "x".repeat(101),
            price: "100".into(),
        };
        let errors = validate_item_create(&form).unwrap_err();
        assert_eq!(
            errors.message("itemName").as_deref(),
            Some("Item name is too long")
        );
    }

    #[test]
    fn test_price_bounds() {
        let too_small = ItemFormData {
            item_name: "a".into(),
            price: "0".into(),
        };
        assert_eq!(
            validate_item_create(&too_small)
                .unwrap_err()
                .message("price")
                .as_deref(),
            Some("Price must be at least 1")
        );

        let too_big = ItemFormData {
            item_name: "a".into(),
            price: "50000001".into(),
        };
        assert_eq!(
            validate_item_create(&too_big)
                .unwrap_err()
                .message("price")
                .as_deref(),
            Some("Price is too big")
        );

        let max = ItemFormData {
            item_name: "a".into(),
            price: "50000000".into(),
        };
        assert_eq!(validate_item_create(&max).unwrap().price, 50_000_000);
    }

    #[test]
    fn test_price_coercion_failures() {
        let fractional = ItemFormData {
            item_name: "a".into(),
            price: "12.5".into(),
        };
        assert_eq!(
            validate_item_create(&fractional)
                .unwrap_err()
                .message("price")
                .as_deref(),
            Some("Price must be an integer")
        );

        let garbage = ItemFormData {
            item_name: "a".into(),
            price: "abc".into(),
        };
        assert_eq!(
            validate_item_create(&garbage)
                .unwrap_err()
                .message("price")
                .as_deref(),
            Some("Price must be a number")
        );

        // empty coerces to 0, which then fails the minimum
        let empty = ItemFormData {
            item_name: "a".into(),
            price: "".into(),
        };
        assert_eq!(
            validate_item_create(&empty)
                .unwrap_err()
                .message("price")
                .as_deref(),
            Some("Price must be at least 1")
        );
    }

    #[test]
    fn test_update_wraps_fields_in_some() {
        let form = ItemFormData {
            item_name: "Teh".into(),
            price: "5000".into(),
        };
        let request = validate_item_update(&form).unwrap();
        assert_eq!(request.item_name.as_deref(), Some("Teh"));
        assert_eq!(request.price, Some(5000));
    }
}
